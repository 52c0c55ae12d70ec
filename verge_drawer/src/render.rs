// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render projection: resolved state to CSS-facing classes, styles, and
//! content regions.
//!
//! This is presentation glue, not core state. The host framework owns the
//! actual elements and content; this module only computes what to put on
//! the drawer's root element — the modifier class set, the width, and the
//! axis-appropriate translate — plus the ordered content regions.

use alloc::borrow::Cow;
use core::fmt;

use smallvec::SmallVec;

use crate::config::{DockFlags, DrawerConfig};
use crate::placement::Axis;

/// Class list for the drawer's root element.
///
/// Inline capacity covers the full modifier set plus chrome classes for the
/// common cases.
pub type ClassList = SmallVec<[Cow<'static, str>; 12]>;

/// Computes the modifier class set for the drawer's root element.
///
/// The predicates mirror the drawer's declared flags rather than the
/// resolved geometry: `temporary` covers mobile drawers too, and `start` is
/// emitted for anything not explicitly docked right. Chrome classes from
/// the passthrough options are appended after the modifier set.
#[must_use]
pub fn classes(config: &DrawerConfig, hovering: bool) -> ClassList {
    let mut out = ClassList::new();
    out.push(Cow::Borrowed(config.aligned.class_name()));
    if config.dock.contains(DockFlags::BOTTOM) {
        out.push(Cow::Borrowed("bottom"));
    }
    if config.dock.contains(DockFlags::RIGHT) {
        out.push(Cow::Borrowed("end"));
    }
    if config.expand_on_hover {
        out.push(Cow::Borrowed("expand-on-hover"));
    }
    if config.floating {
        out.push(Cow::Borrowed("floating"));
    }
    if hovering {
        out.push(Cow::Borrowed("is-hovering"));
    }
    if config.mobile {
        out.push(Cow::Borrowed("is-mobile"));
    }
    if config.rail {
        out.push(Cow::Borrowed("rail"));
    }
    if config.dock.contains(DockFlags::LEFT) || !config.dock.contains(DockFlags::RIGHT) {
        out.push(Cow::Borrowed("start"));
    }
    if config.temporary || config.mobile {
        out.push(Cow::Borrowed("temporary"));
    }

    if config.chrome.border {
        out.push(Cow::Borrowed("border"));
    }
    if let Some(elevation) = config.chrome.elevation {
        out.push(Cow::Owned(alloc::format!("elevation-{elevation}")));
    }
    if config.chrome.rounded {
        out.push(Cow::Borrowed("rounded"));
    }
    if let Some(tone) = config.chrome.theme {
        out.push(Cow::Borrowed(tone.class_name()));
    }
    out
}

/// A translate percentage along one axis.
///
/// Displays as the CSS transform function for the axis:
///
/// ```rust
/// use verge_drawer::{Axis, Translate};
///
/// let hidden = Translate { percent: -100.0, axis: Axis::Horizontal };
/// assert_eq!(hidden.to_string(), "translateX(-100%)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Translate {
    /// Signed percentage of the drawer's own extent.
    pub percent: f64,
    /// The axis the translation applies along.
    pub axis: Axis,
}

impl fmt::Display for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.axis {
            Axis::Horizontal => write!(f, "translateX({}%)", self.percent),
            Axis::Vertical => write!(f, "translateY({}%)", self.percent),
        }
    }
}

/// Computed style for the drawer's root element.
///
/// Displays as a CSS fragment:
///
/// ```rust
/// use verge_drawer::{Axis, DrawerStyle, Translate};
///
/// let style = DrawerStyle {
///     width: 256.0,
///     translate: Translate { percent: 0.0, axis: Axis::Horizontal },
/// };
/// assert_eq!(style.to_string(), "width: 256px; transform: translateX(0%)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawerStyle {
    /// Rendered width in logical pixels (the hover-aware visible width, not
    /// the reserved size).
    pub width: f64,
    /// On/off-screen translation.
    pub translate: Translate,
}

impl fmt::Display for DrawerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "width: {}px; transform: {}", self.width, self.translate)
    }
}

/// The drawer's content regions, in render order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SlotRegion {
    /// Image header behind the drawer content.
    Image,
    /// Content pinned before the body.
    Prepend,
    /// The default body region.
    Body,
    /// Content pinned after the body.
    Append,
}

/// Optional content regions, generic over the host's content handle.
///
/// The host framework owns the actual content (elements, virtual nodes,
/// widget ids); the drawer only carries the handles and yields them in
/// render order.
#[derive(Clone, Debug, PartialEq)]
pub struct Slots<T> {
    /// Image header, rendered behind everything else.
    pub image: Option<T>,
    /// Content before the body.
    pub prepend: Option<T>,
    /// The default body.
    pub body: Option<T>,
    /// Content after the body.
    pub append: Option<T>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            image: None,
            prepend: None,
            body: None,
            append: None,
        }
    }
}

impl<T> Slots<T> {
    /// Returns `true` if no region has content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.prepend.is_none() && self.body.is_none() && self.append.is_none()
    }

    /// Iterates the populated regions in render order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotRegion, &T)> {
        [
            (SlotRegion::Image, self.image.as_ref()),
            (SlotRegion::Prepend, self.prepend.as_ref()),
            (SlotRegion::Body, self.body.as_ref()),
            (SlotRegion::Append, self.append.as_ref()),
        ]
        .into_iter()
        .filter_map(|(region, content)| content.map(|content| (region, content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Alignment, Chrome, ThemeTone};
    use alloc::string::ToString;
    use alloc::vec::Vec;

    fn names(classes: &ClassList) -> Vec<&str> {
        classes.iter().map(|class| class.as_ref()).collect()
    }

    #[test]
    fn default_config_classes() {
        let config = DrawerConfig::default();
        assert_eq!(names(&classes(&config, false)), ["aligned-start", "start"]);
    }

    #[test]
    fn right_docked_drawer_is_end_not_start() {
        let config = DrawerConfig {
            dock: DockFlags::RIGHT,
            ..DrawerConfig::default()
        };
        assert_eq!(names(&classes(&config, false)), ["aligned-start", "end"]);
    }

    #[test]
    fn mobile_implies_the_temporary_class() {
        let config = DrawerConfig {
            mobile: true,
            ..DrawerConfig::default()
        };
        let list = classes(&config, false);
        let names = names(&list);
        assert!(names.contains(&"is-mobile"));
        assert!(names.contains(&"temporary"));
    }

    #[test]
    fn hovering_rail_drawer_classes() {
        let config = DrawerConfig {
            rail: true,
            expand_on_hover: true,
            aligned: Alignment::Center,
            ..DrawerConfig::default()
        };
        assert_eq!(
            names(&classes(&config, true)),
            ["aligned-center", "expand-on-hover", "is-hovering", "rail", "start"]
        );
    }

    #[test]
    fn chrome_classes_append_after_the_modifier_set() {
        let config = DrawerConfig {
            floating: true,
            chrome: Chrome {
                border: true,
                elevation: Some(4),
                rounded: true,
                theme: Some(ThemeTone::Dark),
            },
            ..DrawerConfig::default()
        };
        assert_eq!(
            names(&classes(&config, false)),
            [
                "aligned-start",
                "floating",
                "start",
                "border",
                "elevation-4",
                "rounded",
                "theme--dark"
            ]
        );
    }

    #[test]
    fn translate_formats_per_axis() {
        let x = Translate {
            percent: -100.0,
            axis: Axis::Horizontal,
        };
        assert_eq!(x.to_string(), "translateX(-100%)");

        let y = Translate {
            percent: 100.0,
            axis: Axis::Vertical,
        };
        assert_eq!(y.to_string(), "translateY(100%)");
    }

    #[test]
    fn style_formats_width_and_transform() {
        let style = DrawerStyle {
            width: 72.0,
            translate: Translate {
                percent: 0.0,
                axis: Axis::Horizontal,
            },
        };
        assert_eq!(style.to_string(), "width: 72px; transform: translateX(0%)");
    }

    #[test]
    fn empty_slots_yield_nothing() {
        let slots: Slots<u32> = Slots::default();
        assert!(slots.is_empty());
        assert_eq!(slots.iter().count(), 0);
    }

    #[test]
    fn slots_iterate_in_render_order() {
        let slots = Slots {
            image: None,
            prepend: Some("prepend"),
            body: Some("body"),
            append: Some("append"),
        };
        let regions: Vec<_> = slots.iter().collect();
        assert_eq!(
            regions,
            [
                (SlotRegion::Prepend, &"prepend"),
                (SlotRegion::Body, &"body"),
                (SlotRegion::Append, &"append")
            ]
        );
    }
}
