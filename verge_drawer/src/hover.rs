// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: track pointer enter/leave over the drawer's root.
//!
//! The tracker is purely local and synchronous; there is no debouncing and
//! no notion of position. It records hover unconditionally — whether the
//! hover actually widens the drawer is decided later by the dimension
//! resolver, so a drawer that enables `expand_on_hover` mid-hover picks up
//! the already-recorded state.

/// Tracks whether the pointer is currently over the drawer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoverState {
    hovering: bool,
}

impl HoverState {
    /// Records the pointer entering the drawer.
    ///
    /// Returns `true` if this changed the state.
    pub fn pointer_enter(&mut self) -> bool {
        let changed = !self.hovering;
        self.hovering = true;
        changed
    }

    /// Records the pointer leaving the drawer; hover always resets to false.
    ///
    /// Returns `true` if this changed the state.
    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.hovering;
        self.hovering = false;
        changed
    }

    /// Returns `true` while the pointer is over the drawer.
    #[must_use]
    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}
