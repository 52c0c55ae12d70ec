// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer controller: owns the configuration and interaction state and
//! runs the reconciliation pass.

use verge_layout::{LayoutRegistry, PanelId};

use crate::config::DrawerConfig;
use crate::dimensions;
use crate::hover::HoverState;
use crate::placement::Placement;
use crate::render::{self, ClassList, DrawerStyle, Translate};

/// The output of one reconciliation pass.
///
/// Everything a host needs to render the drawer's root element and position
/// it relative to the other panels on its edge.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerFrame {
    /// Modifier class set for the root element.
    pub classes: ClassList,
    /// Width and translate for the root element. The width here is the
    /// hover-aware visible width.
    pub style: DrawerStyle,
    /// The resolved effective size (rail width in rail mode, declared width
    /// otherwise), independent of hover.
    pub effective_size: f64,
    /// The size submitted to the layout registry this pass: the effective
    /// size while reserving, otherwise `0.0`.
    pub reserved: f64,
    /// Leading offset returned by the registry; the accumulated size of
    /// higher-precedence panels on the same edge.
    pub offset: f64,
    /// The resolved placement outputs.
    pub placement: Placement,
}

/// A collapsible side-panel and its reactive state.
///
/// A `Drawer` owns its [`DrawerConfig`], its hover tracker, and the
/// [`PanelId`] of its single entry in the shared [`LayoutRegistry`]. State
/// changes go through the setters (or [`Drawer::edit`]) so the drawer can
/// track its revision; [`Drawer::frame`] then recomputes the geometry in
/// dependency order and re-registers the reservation.
///
/// # Example
///
/// ```rust
/// use verge_drawer::{Drawer, DrawerConfig};
/// use verge_layout::{Edge, LayoutRegistry, PanelId};
///
/// let mut layout = LayoutRegistry::new();
/// let mut drawer = Drawer::new(PanelId::new(0), DrawerConfig::default());
///
/// let frame = drawer.frame(&mut layout);
/// // Desktop default: open, docked, reserving its declared width.
/// assert_eq!(drawer.is_open(), Some(true));
/// assert_eq!(frame.reserved, 256.0);
/// assert_eq!(layout.reserved_on(Edge::Left), 256.0);
///
/// drawer.set_open(false);
/// let frame = drawer.frame(&mut layout);
/// assert_eq!(frame.reserved, 0.0);
/// assert_eq!(frame.style.translate.to_string(), "translateX(-100%)");
///
/// drawer.detach(&mut layout);
/// assert!(layout.is_empty());
/// ```
#[derive(Debug)]
pub struct Drawer {
    id: PanelId,
    config: DrawerConfig,
    hover: HoverState,
    revision: u64,
}

impl Drawer {
    /// Creates a drawer that will claim the given registry entry.
    #[must_use]
    pub fn new(id: PanelId, config: DrawerConfig) -> Self {
        Self {
            id,
            config,
            hover: HoverState::default(),
            revision: 0,
        }
    }

    /// Returns the drawer's registry id.
    #[must_use]
    #[inline]
    pub fn id(&self) -> PanelId {
        self.id
    }

    /// Returns the current configuration.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Returns the revision counter.
    ///
    /// Bumped once per observable state change; unchanged by no-op setters
    /// and by [`Drawer::frame`] itself (except for the one-time open seed).
    /// Hosts can compare revisions to skip redundant re-renders.
    #[must_use]
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the open flag; `None` until seeded or explicitly set.
    #[must_use]
    #[inline]
    pub fn is_open(&self) -> Option<bool> {
        self.config.open
    }

    /// Returns `true` while the pointer is over the drawer.
    #[must_use]
    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hover.is_hovering()
    }

    /// Sets the open flag.
    ///
    /// Returns `true` if this changed the state.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.config.open == Some(open) {
            return false;
        }
        self.config.open = Some(open);
        self.revision += 1;
        true
    }

    /// Flips the open flag, seeding it first if it was never set.
    ///
    /// Returns the new value.
    pub fn toggle(&mut self) -> bool {
        let open = !self.config.open.unwrap_or(!self.config.mobile);
        self.set_open(open);
        open
    }

    /// Edits the configuration in place.
    ///
    /// The revision is bumped only if the closure actually changed
    /// something. Returns `true` on change.
    pub fn edit(&mut self, f: impl FnOnce(&mut DrawerConfig)) -> bool {
        let before = self.config.clone();
        f(&mut self.config);
        let changed = self.config != before;
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Records the pointer entering the drawer's root element.
    ///
    /// Returns `true` if this changed the state.
    pub fn pointer_enter(&mut self) -> bool {
        let changed = self.hover.pointer_enter();
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Records the pointer leaving the drawer's root element.
    ///
    /// Returns `true` if this changed the state.
    pub fn pointer_leave(&mut self) -> bool {
        let changed = self.hover.pointer_leave();
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Runs one reconciliation pass and re-registers the reservation.
    ///
    /// The pass is ordered size → reservation → offset: dimensions are
    /// resolved first, the placement state machine decides whether the
    /// effective size is reserved, the registry is updated with the result,
    /// and the returned offset feeds the frame. Submitting the same state
    /// twice is idempotent against the registry.
    ///
    /// The first pass seeds an unset open flag to `!mobile`; this happens
    /// exactly once per drawer, before any geometry is derived.
    pub fn frame(&mut self, layout: &mut LayoutRegistry) -> DrawerFrame {
        if self.config.open.is_none() {
            self.config.open = Some(!self.config.mobile);
            self.revision += 1;
        }
        let open = self.config.open == Some(true);

        let effective =
            dimensions::effective_size(self.config.rail, self.config.width, self.config.rail_width);
        let visible = dimensions::visible_width(
            effective,
            self.config.rail,
            self.config.expand_on_hover,
            self.hover.is_hovering(),
            self.config.width,
        );

        let placement = Placement::resolve(
            open,
            self.config.permanent,
            self.config.stateless,
            self.config.temporary,
            self.config.dock,
        );

        let reserved = if placement.reserves_space { effective } else { 0.0 };
        let offset = layout.register(self.id, placement.layout_edge, self.config.priority, reserved);

        DrawerFrame {
            classes: render::classes(&self.config, self.hover.is_hovering()),
            style: DrawerStyle {
                width: visible,
                translate: Translate {
                    percent: placement.translate,
                    axis: placement.axis,
                },
            },
            effective_size: effective,
            reserved,
            offset,
            placement,
        }
    }

    /// Releases the drawer's registry entry on teardown.
    ///
    /// Returns whether an entry existed. The drawer itself stays usable; the
    /// next [`Drawer::frame`] re-registers.
    pub fn detach(&mut self, layout: &mut LayoutRegistry) -> bool {
        layout.unregister(self.id)
    }
}
