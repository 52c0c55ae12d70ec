// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration: one explicit struct with documented defaults.
//!
//! Hosts assemble a [`DrawerConfig`] up front (or mutate it through
//! [`Drawer`](crate::Drawer) setters) instead of merging option bundles at
//! runtime. Every field has a defined default, so a `DrawerConfig::default()`
//! is always a valid left-docked 256px drawer.

use alloc::string::String;
use core::fmt;

use verge_layout::Edge;

/// Default full width of a drawer, in logical pixels.
pub const DEFAULT_WIDTH: f64 = 256.0;

/// Default collapsed (rail) width of a drawer, in logical pixels.
pub const DEFAULT_RAIL_WIDTH: f64 = 72.0;

/// Cross-axis alignment of the drawer within its edge.
///
/// The recognized names are `start`, `center`, and `end`; anything else is
/// rejected at the configuration boundary by [`Alignment::from_name`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Alignment {
    /// Align with the leading end of the edge.
    #[default]
    Start,
    /// Center along the edge.
    Center,
    /// Align with the trailing end of the edge.
    End,
}

impl Alignment {
    /// Returns the configuration name of this alignment.
    #[must_use]
    #[inline]
    pub const fn as_name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    /// Returns the CSS modifier class for this alignment.
    #[must_use]
    #[inline]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Start => "aligned-start",
            Self::Center => "aligned-center",
            Self::End => "aligned-end",
        }
    }

    /// Parses an alignment from its configuration name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAlignment`] if `name` is not one of `start`,
    /// `center`, or `end`.
    pub fn from_name(name: &str) -> Result<Self, InvalidAlignment> {
        match name {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => Err(InvalidAlignment {
                name: String::from(name),
            }),
        }
    }
}

/// Error returned when an alignment name is not recognized.
///
/// This is a non-fatal configuration error: the offending value is not
/// applied and the drawer keeps rendering with its previous alignment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidAlignment {
    name: String,
}

impl InvalidAlignment {
    /// Returns the rejected name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for InvalidAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unrecognized drawer alignment {:?}; expected one of start, center, end",
            self.name
        )
    }
}

impl core::error::Error for InvalidAlignment {}

bitflags::bitflags! {
    /// Edge placement flags controlling which viewport side the drawer docks to.
    ///
    /// The flags are independent booleans, mirroring how hosts typically
    /// declare them. `LEFT` and `RIGHT` choose the accounting edge; `BOTTOM`
    /// switches the slide axis to vertical. When contradictory horizontal
    /// flags are set, the explicitly leading `LEFT` wins.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DockFlags: u8 {
        /// Dock to the left viewport edge.
        const LEFT   = 0b0000_0001;
        /// Dock to the right viewport edge.
        const RIGHT  = 0b0000_0010;
        /// Dock toward the top of the viewport.
        const TOP    = 0b0000_0100;
        /// Dock to the bottom viewport edge; the drawer slides vertically.
        const BOTTOM = 0b0000_1000;
    }
}

impl Default for DockFlags {
    fn default() -> Self {
        Self::LEFT
    }
}

impl DockFlags {
    /// Returns `true` when the drawer is docked to a trailing edge: right
    /// (without an explicit left) or bottom.
    ///
    /// Trailing-edge drawers slide off screen toward positive coordinates;
    /// leading-edge drawers slide toward negative coordinates.
    #[must_use]
    #[inline]
    pub const fn is_trailing(self) -> bool {
        (self.contains(Self::RIGHT) && !self.contains(Self::LEFT)) || self.contains(Self::BOTTOM)
    }

    /// Returns the edge this drawer's reservation is accounted against.
    ///
    /// Horizontal space accounting only distinguishes left from right;
    /// bottom docking changes the slide axis, not the accounting edge.
    #[must_use]
    #[inline]
    pub const fn layout_edge(self) -> Edge {
        if self.contains(Self::RIGHT) && !self.contains(Self::LEFT) {
            Edge::Right
        } else {
            Edge::Left
        }
    }
}

/// Theme tone passed through to the render projection.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ThemeTone {
    /// Light theme surface.
    Light,
    /// Dark theme surface.
    Dark,
}

impl ThemeTone {
    /// Returns the CSS class for this tone.
    #[must_use]
    #[inline]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Light => "theme--light",
            Self::Dark => "theme--dark",
        }
    }
}

/// Passthrough surface styling, consumed only by the render projection.
///
/// None of these affect sizing, visibility, or layout reservation; they only
/// contribute classes to the rendered root element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Chrome {
    /// Emit the `border` class.
    pub border: bool,
    /// Emit an `elevation-<n>` class.
    pub elevation: Option<u8>,
    /// Emit the `rounded` class.
    pub rounded: bool,
    /// Emit a theme tone class.
    pub theme: Option<ThemeTone>,
}

/// Complete drawer configuration.
///
/// All fields are independent; the drawer's state machine resolves them into
/// one unambiguous geometry on every [`frame`](crate::Drawer::frame) pass.
///
/// # Defaults
///
/// | field | default |
/// |-------|---------|
/// | `open` | `None` (seeded to `!mobile` on first evaluation) |
/// | `permanent`, `stateless`, `temporary`, `mobile`, `rail`, `expand_on_hover`, `floating` | `false` |
/// | `width` | `256.0` |
/// | `rail_width` | `72.0` |
/// | `dock` | [`DockFlags::LEFT`] |
/// | `priority` | `0` |
/// | `aligned` | [`Alignment::Start`] |
/// | `chrome`, `image_src` | empty |
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Whether the drawer is open. `None` means "not yet initialized"; the
    /// first evaluation seeds it to `!mobile`, after which it is fully
    /// caller controlled.
    pub open: Option<bool>,
    /// A permanent drawer always reserves space, regardless of `open`.
    pub permanent: bool,
    /// A stateless drawer is not dismissible by outside interaction and,
    /// like a permanent one, always reserves space.
    ///
    /// Combining `stateless` with `temporary` is ambiguous upstream; the
    /// reservation rules let `stateless` dominate, so the combination still
    /// reserves space.
    pub stateless: bool,
    /// Overlay mode: the drawer renders above content and never reserves
    /// layout space, even while open.
    pub temporary: bool,
    /// Device class flag. Affects only the seeded `open` default and the
    /// rendered class set, not space reservation.
    pub mobile: bool,
    /// Collapsed width mode (typically icon-only).
    pub rail: bool,
    /// Widen a rail drawer to its full width while hovered, without changing
    /// its reserved footprint.
    pub expand_on_hover: bool,
    /// Full width in logical pixels.
    pub width: f64,
    /// Collapsed width in logical pixels, used while `rail` is set.
    pub rail_width: f64,
    /// Edge placement flags.
    pub dock: DockFlags,
    /// Ordering key for the shared layout registry; higher binds closer to
    /// the edge.
    pub priority: i32,
    /// Cross-axis alignment along the docked edge.
    pub aligned: Alignment,
    /// Render without the docked-edge border treatment.
    pub floating: bool,
    /// Passthrough surface styling.
    pub chrome: Chrome,
    /// Source for the image header region, if any.
    pub image_src: Option<String>,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            open: None,
            permanent: false,
            stateless: false,
            temporary: false,
            mobile: false,
            rail: false,
            expand_on_hover: false,
            width: DEFAULT_WIDTH,
            rail_width: DEFAULT_RAIL_WIDTH,
            dock: DockFlags::default(),
            priority: 0,
            aligned: Alignment::default(),
            floating: false,
            chrome: Chrome::default(),
            image_src: None,
        }
    }
}

impl DrawerConfig {
    /// Applies an alignment by name, validating it at the boundary.
    ///
    /// On success the alignment is applied. On failure the previous value is
    /// kept, a warning is emitted on the embedding application's diagnostic
    /// channel, and the error is returned for hosts that want to surface it
    /// themselves. Rendering is unaffected either way.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAlignment`] if `name` is not one of `start`,
    /// `center`, or `end`.
    pub fn set_aligned_name(&mut self, name: &str) -> Result<(), InvalidAlignment> {
        match Alignment::from_name(name) {
            Ok(aligned) => {
                self.aligned = aligned;
                Ok(())
            }
            Err(err) => {
                log::warn!("{err}; keeping {:?}", self.aligned.as_name());
                Err(err)
            }
        }
    }
}
