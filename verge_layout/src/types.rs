// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the reservation registry: edges and panel identifiers.

use core::fmt;

/// The viewport side a reservation is docked to.
///
/// Horizontal panels (drawers, rails) claim space on [`Edge::Left`] or
/// [`Edge::Right`]; app bars and bottom sheets claim [`Edge::Top`] or
/// [`Edge::Bottom`]. Reservations only compete with other reservations on
/// the same edge.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    /// The leading horizontal edge.
    Left,
    /// The trailing horizontal edge.
    Right,
    /// The leading vertical edge.
    Top,
    /// The trailing vertical edge.
    Bottom,
}

impl Edge {
    /// Returns `true` for the trailing edges ([`Edge::Right`] and
    /// [`Edge::Bottom`]).
    ///
    /// Panels docked to a trailing edge slide off screen toward positive
    /// coordinates; leading-edge panels slide toward negative coordinates.
    #[must_use]
    #[inline]
    pub const fn is_trailing(self) -> bool {
        matches!(self, Self::Right | Self::Bottom)
    }

    /// Returns `true` for the horizontal edges ([`Edge::Left`] and
    /// [`Edge::Right`]).
    #[must_use]
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Identifier for one registry entry.
///
/// Panel ids are simple `u32` keys, typically defined as constants at the
/// application level. Each panel owns exactly one id and submits all of its
/// registry writes through it; two panels sharing an id would overwrite each
/// other's reservation.
///
/// # Example
///
/// ```rust
/// use verge_layout::PanelId;
///
/// const NAV_DRAWER: PanelId = PanelId::new(0);
/// const APP_BAR: PanelId = PanelId::new(1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(u32);

impl PanelId {
    /// Creates a new panel id with the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this panel id.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PanelId").field(&self.0).finish()
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PanelId({})", self.0)
    }
}
