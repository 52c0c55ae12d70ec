// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=verge_layout --heading-base-level=0

//! Verge Layout: a shared registry of edge-docked space reservations.
//!
//! Application shells often dock several panels against the viewport edges:
//! navigation drawers, app bars, bottom sheets, tool rails. Each of them
//! subtracts some width or height from the page layout that the remaining
//! content may use, and panels stacked on the same edge must not overlap.
//! This crate provides the accounting for that: a [`LayoutRegistry`] that
//! panels submit their reserved size to and that hands back the offset at
//! which each panel should render.
//!
//! The registry is deliberately not a layout engine. It knows nothing about
//! the panels themselves, only about `(edge, priority, size)` claims keyed by
//! a caller-owned [`PanelId`]. Hosts construct one registry per layout
//! surface and pass it to each panel — registration lifecycle stays explicit
//! and testable, with no ambient global state.
//!
//! ## Discipline
//!
//! - Each panel owns exactly one registry entry and writes it only through
//!   its own [`PanelId`].
//! - [`LayoutRegistry::register`] is an idempotent upsert: re-submitting the
//!   same values never double-counts reserved space and never reorders
//!   siblings.
//! - Entries must be removed with [`LayoutRegistry::unregister`] when a panel
//!   is torn down; a stale entry keeps claiming space and would misposition
//!   the other panels on its edge.
//!
//! ## Precedence
//!
//! Entries on the same edge are ordered by descending [`priority`], ties
//! broken by registration order (earlier registrations bind closer to the
//! edge). A panel's offset is the accumulated size of all entries that
//! precede it in that order.
//!
//! [`priority`]: LayoutRegistry::register
//!
//! ## Minimal example
//!
//! ```rust
//! use verge_layout::{Edge, LayoutRegistry, PanelId};
//!
//! const NAV: PanelId = PanelId::new(0);
//! const TOOLS: PanelId = PanelId::new(1);
//!
//! let mut layout = LayoutRegistry::new();
//!
//! // The navigation drawer claims 256px on the left edge.
//! let offset = layout.register(NAV, Edge::Left, 0, 256.0);
//! assert_eq!(offset, 0.0);
//!
//! // A tool rail on the same edge renders after the drawer.
//! let offset = layout.register(TOOLS, Edge::Left, -1, 72.0);
//! assert_eq!(offset, 256.0);
//!
//! // The page subtracts the total from its own width.
//! assert_eq!(layout.reserved_on(Edge::Left), 328.0);
//!
//! // Teardown releases the claim.
//! layout.unregister(NAV);
//! assert_eq!(layout.offset_of(TOOLS), Some(0.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod types;

pub use registry::LayoutRegistry;
pub use types::{Edge, PanelId};
