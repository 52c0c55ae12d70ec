// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=verge_drawer --heading-base-level=0

//! Verge Drawer: renderer-agnostic state core for collapsible side panels.
//!
//! A drawer is a panel docked to a viewport edge that can be permanently
//! docked, temporarily overlaid, collapsed to an icon rail, or hidden, and
//! that reserves space in the surrounding page layout proportional to its
//! current size. The hard part is not the rendering — it is resolving a set
//! of independent flags (open, permanent, temporary, rail, mobile, hover
//! expansion, edge placement) into one unambiguous geometry on every change.
//! This crate is that resolution logic, split into small derived steps:
//!
//! - [`dimensions`]: declared width / rail width / hover state down to one
//!   effective pixel size and one visible width.
//! - [`Placement`]: the visibility/placement state machine — whether the
//!   drawer occupies layout space, and the signed translate that slides it
//!   on or off screen.
//! - [`Drawer`]: the controller that owns the state, seeds the open default
//!   once, and re-registers its space claim with a shared
//!   [`verge_layout::LayoutRegistry`] on every pass.
//! - [`classes`] / [`DrawerStyle`] / [`Slots`]: the CSS-facing projection of
//!   the resolved state.
//!
//! The crate does not assume any particular UI framework. Hosts own the
//! actual elements, wire pointer enter/leave events to
//! [`Drawer::pointer_enter`] / [`Drawer::pointer_leave`], call
//! [`Drawer::frame`] when state changes, and apply the returned classes and
//! styles however they render.
//!
//! ## The two widths
//!
//! A rail drawer with `expand_on_hover` widens under the pointer without
//! shifting sibling content. That works because sizing is split in two:
//! the *effective size* (rail width in rail mode) drives the layout
//! reservation, while the *visible width* (full width while hovered) drives
//! only the rendered geometry. Hover can never leak into the reservation.
//!
//! ## Minimal example
//!
//! ```rust
//! use verge_drawer::{Drawer, DrawerConfig};
//! use verge_layout::{Edge, LayoutRegistry, PanelId};
//!
//! let mut layout = LayoutRegistry::new();
//! let mut drawer = Drawer::new(PanelId::new(0), DrawerConfig::default());
//!
//! // First pass seeds the open default (open on desktop) and claims space.
//! let frame = drawer.frame(&mut layout);
//! assert_eq!(frame.reserved, 256.0);
//! assert_eq!(frame.offset, 0.0);
//! assert_eq!(frame.style.to_string(), "width: 256px; transform: translateX(0%)");
//!
//! // Closing releases the claim; the drawer slides out toward its edge.
//! drawer.set_open(false);
//! let frame = drawer.frame(&mut layout);
//! assert_eq!(layout.reserved_on(Edge::Left), 0.0);
//! assert_eq!(frame.style.translate.to_string(), "translateX(-100%)");
//! ```
//!
//! ## Overlay and rail modes
//!
//! ```rust
//! use verge_drawer::{Drawer, DrawerConfig};
//! use verge_layout::{LayoutRegistry, PanelId};
//!
//! let mut layout = LayoutRegistry::new();
//!
//! // A temporary drawer renders above content and never reserves space.
//! let mut overlay = Drawer::new(
//!     PanelId::new(0),
//!     DrawerConfig { temporary: true, open: Some(true), ..DrawerConfig::default() },
//! );
//! let frame = overlay.frame(&mut layout);
//! assert_eq!(frame.reserved, 0.0);
//! assert_eq!(frame.style.width, 256.0);
//!
//! // A permanent rail reserves its collapsed width and expands on hover.
//! let mut rail = Drawer::new(
//!     PanelId::new(1),
//!     DrawerConfig {
//!         permanent: true,
//!         rail: true,
//!         expand_on_hover: true,
//!         ..DrawerConfig::default()
//!     },
//! );
//! rail.pointer_enter();
//! let frame = rail.frame(&mut layout);
//! assert_eq!(frame.reserved, 72.0);
//! assert_eq!(frame.style.width, 256.0);
//! ```
//!
//! ## Configuration validation
//!
//! Configuration is one explicit struct with documented defaults,
//! [`DrawerConfig`]. The only validated boundary is the alignment name:
//! anything outside `start`/`center`/`end` is rejected, warned about on the
//! `log` facade, and never applied — the drawer keeps rendering with its
//! previous alignment.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
pub mod dimensions;
mod drawer;
mod hover;
mod placement;
mod render;

pub use config::{
    Alignment, Chrome, DEFAULT_RAIL_WIDTH, DEFAULT_WIDTH, DockFlags, DrawerConfig,
    InvalidAlignment, ThemeTone,
};
pub use drawer::{Drawer, DrawerFrame};
pub use hover::HoverState;
pub use placement::{Axis, DrawerState, Placement};
pub use render::{ClassList, DrawerStyle, SlotRegion, Slots, Translate, classes};
