// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dimension resolution: declared widths down to one effective pixel size.
//!
//! Two pure, total functions split the drawer's width into the two roles it
//! plays: [`effective_size`] is what the drawer claims from the shared
//! layout, [`visible_width`] is what it actually paints. They only differ
//! while a rail drawer with hover expansion is hovered, which is exactly
//! what lets the drawer widen under the pointer without shifting sibling
//! content.

/// Resolves the drawer's effective size: the collapsed rail width while in
/// rail mode, the declared width otherwise.
///
/// This is the size that drives space reservation.
#[must_use]
#[inline]
pub fn effective_size(rail: bool, width: f64, rail_width: f64) -> f64 {
    if rail { rail_width } else { width }
}

/// Resolves the width the drawer renders at.
///
/// Hovering a rail drawer that expands on hover transiently yields the full
/// declared width; in every other state the rendered width equals
/// `effective`. Hover state feeds only this function, never the reserved
/// footprint.
#[must_use]
#[inline]
pub fn visible_width(
    effective: f64,
    rail: bool,
    expand_on_hover: bool,
    hovering: bool,
    width: f64,
) -> f64 {
    if rail && expand_on_hover && hovering {
        width
    } else {
        effective
    }
}
