// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `verge_drawer` crate.
//!
//! These exercise whole-drawer scenarios end to end: flags in, geometry and
//! registry effects out, with a focus on the interactions between modes
//! (permanence × visibility × rail × hover × edge).

use verge_drawer::{Alignment, DockFlags, Drawer, DrawerConfig, DrawerState};
use verge_layout::{Edge, LayoutRegistry, PanelId};

const ID: PanelId = PanelId::new(0);

fn drawer(config: DrawerConfig) -> Drawer {
    Drawer::new(ID, config)
}

#[test]
fn open_temporary_drawer_overlays_without_reserving() {
    // {permanent:false, stateless:false, temporary:true, open:true,
    //  rail:false, width:300} → no reservation, width 300, translate 0%.
    let mut layout = LayoutRegistry::new();
    let mut drawer = drawer(DrawerConfig {
        temporary: true,
        open: Some(true),
        width: 300.0,
        ..DrawerConfig::default()
    });

    let frame = drawer.frame(&mut layout);
    assert!(!frame.placement.reserves_space);
    assert_eq!(frame.reserved, 0.0);
    assert_eq!(frame.style.width, 300.0);
    assert_eq!(frame.style.translate.percent, 0.0);
    assert_eq!(frame.placement.state, DrawerState::OpenOverlay);
    assert_eq!(layout.reserved_on(Edge::Left), 0.0);
}

#[test]
fn hovered_permanent_rail_expands_on_screen_only() {
    // {permanent:true, rail:true, rail_width:72, expand_on_hover:true,
    //  hovering:true} → reserves 72, visible width = declared width.
    let mut layout = LayoutRegistry::new();
    let mut drawer = drawer(DrawerConfig {
        permanent: true,
        rail: true,
        expand_on_hover: true,
        ..DrawerConfig::default()
    });
    drawer.pointer_enter();

    let frame = drawer.frame(&mut layout);
    assert!(frame.placement.reserves_space);
    assert_eq!(frame.reserved, 72.0);
    assert_eq!(frame.style.width, 256.0);
    assert_eq!(layout.reserved_on(Edge::Left), 72.0);
    assert!(frame.classes.iter().any(|class| class == "is-hovering"));
}

#[test]
fn invalid_alignment_is_rejected_and_the_drawer_still_renders() {
    let mut layout = LayoutRegistry::new();
    let mut drawer = drawer(DrawerConfig::default());

    let mut rejected = false;
    drawer.edit(|config| {
        rejected = config.set_aligned_name("middle").is_err();
    });
    assert!(rejected);
    assert_eq!(drawer.config().aligned, Alignment::Start);

    let frame = drawer.frame(&mut layout);
    assert!(frame.classes.iter().any(|class| class == "aligned-start"));
    assert_eq!(frame.reserved, 256.0);
}

#[test]
fn hidden_drawer_slides_toward_its_own_edge() {
    let mut layout = LayoutRegistry::new();

    for (dock, expected) in [
        (DockFlags::LEFT, "translateX(-100%)"),
        (DockFlags::RIGHT, "translateX(100%)"),
        (DockFlags::BOTTOM, "translateY(100%)"),
        (DockFlags::LEFT | DockFlags::BOTTOM, "translateY(100%)"),
    ] {
        let mut drawer = Drawer::new(
            PanelId::new(u32::from(dock.bits())),
            DrawerConfig {
                open: Some(false),
                dock,
                ..DrawerConfig::default()
            },
        );
        let frame = drawer.frame(&mut layout);
        assert_eq!(frame.style.translate.to_string(), expected, "dock={dock:?}");
    }
}

#[test]
fn permanent_drawer_ignores_the_open_toggle_for_reservation() {
    let mut layout = LayoutRegistry::new();
    let mut drawer = drawer(DrawerConfig {
        permanent: true,
        open: Some(false),
        ..DrawerConfig::default()
    });

    let frame = drawer.frame(&mut layout);
    assert!(frame.placement.reserves_space);
    assert_eq!(frame.reserved, 256.0);
    // Stateful drawers also never slide off screen.
    assert_eq!(frame.style.translate.percent, 0.0);
    assert_eq!(frame.placement.state, DrawerState::Permanent);
}

#[test]
fn stateless_temporary_drawer_still_reserves() {
    // Ambiguous upstream; stateless dominates by the reservation rules.
    let mut layout = LayoutRegistry::new();
    let mut drawer = drawer(DrawerConfig {
        stateless: true,
        temporary: true,
        open: Some(false),
        ..DrawerConfig::default()
    });

    let frame = drawer.frame(&mut layout);
    assert_eq!(frame.reserved, 256.0);
    assert_eq!(layout.reserved_on(Edge::Left), 256.0);
}

#[test]
fn mobile_seeding_starts_closed_and_stays_caller_controlled() {
    let mut layout = LayoutRegistry::new();
    let mut drawer = drawer(DrawerConfig {
        mobile: true,
        ..DrawerConfig::default()
    });

    drawer.frame(&mut layout);
    assert_eq!(drawer.is_open(), Some(false));

    // The user opens it; nothing re-seeds it closed.
    drawer.set_open(true);
    let frame = drawer.frame(&mut layout);
    assert_eq!(drawer.is_open(), Some(true));

    // Mobile does not force overlay accounting: an open non-temporary
    // drawer reserves space even on mobile.
    assert_eq!(frame.reserved, 256.0);
    assert!(frame.classes.iter().any(|class| class == "temporary"));
}

#[test]
fn rail_toggle_resizes_the_reservation_in_place() {
    let mut layout = LayoutRegistry::new();
    let mut drawer = drawer(DrawerConfig {
        permanent: true,
        ..DrawerConfig::default()
    });

    let frame = drawer.frame(&mut layout);
    assert_eq!(frame.reserved, 256.0);

    drawer.edit(|config| config.rail = true);
    let frame = drawer.frame(&mut layout);
    assert_eq!(frame.reserved, 72.0);
    assert_eq!(layout.reserved_on(Edge::Left), 72.0);
    assert_eq!(layout.len(), 1);
}

#[test]
fn two_drawers_share_an_edge_without_overlapping() {
    let mut layout = LayoutRegistry::new();
    let mut nav = Drawer::new(
        PanelId::new(0),
        DrawerConfig {
            permanent: true,
            priority: 10,
            ..DrawerConfig::default()
        },
    );
    let mut tools = Drawer::new(
        PanelId::new(1),
        DrawerConfig {
            permanent: true,
            rail: true,
            ..DrawerConfig::default()
        },
    );

    let nav_frame = nav.frame(&mut layout);
    let tools_frame = tools.frame(&mut layout);

    assert_eq!(nav_frame.offset, 0.0);
    assert_eq!(tools_frame.offset, 256.0);
    assert_eq!(layout.reserved_on(Edge::Left), 328.0);

    // Tearing the first drawer down repositions the second.
    nav.detach(&mut layout);
    let tools_frame = tools.frame(&mut layout);
    assert_eq!(tools_frame.offset, 0.0);
}

#[test]
fn right_docked_drawer_accounts_on_the_right_edge() {
    let mut layout = LayoutRegistry::new();
    let mut drawer = drawer(DrawerConfig {
        dock: DockFlags::RIGHT,
        open: Some(true),
        ..DrawerConfig::default()
    });

    let frame = drawer.frame(&mut layout);
    assert_eq!(frame.placement.layout_edge, Edge::Right);
    assert_eq!(layout.reserved_on(Edge::Right), 256.0);
    assert_eq!(layout.reserved_on(Edge::Left), 0.0);
    assert!(frame.classes.iter().any(|class| class == "end"));
    assert!(frame.classes.iter().all(|class| class != "start"));
}
