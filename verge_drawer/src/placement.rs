// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility and placement resolution.
//!
//! This is the drawer's state machine. It takes the independent visibility
//! flags and the edge placement and derives, in one pass, everything the
//! rest of the pipeline needs: whether the drawer occupies layout space,
//! how far off screen it sits, which direction it slides, and which edge
//! its reservation is accounted against. The outputs are derived on every
//! evaluation and never stored, so the flags can never disagree with the
//! resolved geometry.

use crate::config::DockFlags;
use verge_layout::Edge;

/// The axis a drawer slides along.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Slide along the x axis (left/right docking).
    Horizontal,
    /// Slide along the y axis (bottom docking).
    Vertical,
}

/// The derived visibility state of a drawer.
///
/// These names exist for diagnostics and tests; the state is recomputed
/// from the flags on every evaluation, never stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DrawerState {
    /// Stateful (permanent or stateless): reserves space regardless of the
    /// open flag.
    Permanent,
    /// Open and docked: visible and reserving space.
    OpenDocked,
    /// Open in overlay mode: visible above content, reserving nothing.
    OpenOverlay,
    /// Closed but still docked. Unreachable: a drawer that reserves space
    /// while closed is by definition stateful, which resolves to
    /// [`DrawerState::Permanent`] instead. Kept to document the state space.
    ClosedDocked,
    /// Closed and fully off screen.
    Closed,
}

/// Resolved placement outputs for one evaluation.
///
/// Produced by [`Placement::resolve`]; consumed by the layout reservation
/// step and the render projection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// `permanent || stateless`: not dismissible by outside interaction.
    pub stateful: bool,
    /// Whether the drawer occupies layout space this evaluation.
    pub reserves_space: bool,
    /// How far off screen the drawer sits, as a percentage of its own
    /// extent: `0.0` when visible, `100.0` when fully hidden.
    pub offscreen_fraction: f64,
    /// Signed translate percentage along [`Placement::axis`]. Negative
    /// slides toward the leading edge, positive toward the trailing edge.
    pub translate: f64,
    /// The axis the drawer slides along.
    pub axis: Axis,
    /// The edge the drawer's reservation is accounted against.
    pub layout_edge: Edge,
    /// The derived state name.
    pub state: DrawerState,
}

impl Placement {
    /// Resolves placement from the visibility flags and edge placement.
    ///
    /// `open` is the seeded open flag — callers resolve the tri-state before
    /// this point, so an uninitialized drawer can never reach the state
    /// machine.
    #[must_use]
    pub fn resolve(
        open: bool,
        permanent: bool,
        stateless: bool,
        temporary: bool,
        dock: DockFlags,
    ) -> Self {
        let stateful = permanent || stateless;
        let reserves_space = stateful || (open && !temporary);
        let offscreen_fraction = if stateful || open { 0.0 } else { 100.0 };
        let sign = if dock.is_trailing() { 1.0 } else { -1.0 };
        let axis = if dock.contains(DockFlags::BOTTOM) {
            Axis::Vertical
        } else {
            Axis::Horizontal
        };

        let state = if stateful {
            DrawerState::Permanent
        } else if open {
            if temporary {
                DrawerState::OpenOverlay
            } else {
                DrawerState::OpenDocked
            }
        } else {
            DrawerState::Closed
        };

        // Sign only a nonzero fraction: 0.0 * -1.0 is -0.0, which formats
        // as "-0%".
        let translate = if offscreen_fraction == 0.0 {
            0.0
        } else {
            offscreen_fraction * sign
        };

        Self {
            stateful,
            reserves_space,
            offscreen_fraction,
            translate,
            axis,
            layout_edge: dock.layout_edge(),
            state,
        }
    }
}
