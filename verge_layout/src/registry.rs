// Copyright 2026 the Verge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reservation registry.

use hashbrown::HashMap;

use crate::types::{Edge, PanelId};

/// One panel's claim on an edge.
#[derive(Clone, Copy, Debug)]
struct Reservation {
    edge: Edge,
    priority: i32,
    size: f64,
    /// Monotonic registration sequence, used to break priority ties.
    /// Preserved across updates so re-submitting never reorders siblings.
    seq: u64,
}

/// A shared registry of edge-docked space reservations.
///
/// Panels submit `(edge, priority, size)` claims keyed by their [`PanelId`]
/// and receive back the leading offset at which they should render: the
/// accumulated size of every other reservation on the same edge that takes
/// precedence. See the crate docs for the precedence rules.
///
/// The registry is plain mutable state; hosts own one per layout surface and
/// hand `&mut` access to each panel during its recomputation pass.
///
/// # Example
///
/// ```rust
/// use verge_layout::{Edge, LayoutRegistry, PanelId};
///
/// let mut layout = LayoutRegistry::new();
/// let offset = layout.register(PanelId::new(0), Edge::Left, 0, 256.0);
/// assert_eq!(offset, 0.0);
/// assert_eq!(layout.reserved_on(Edge::Left), 256.0);
/// ```
#[derive(Debug, Default)]
pub struct LayoutRegistry {
    entries: HashMap<PanelId, Reservation>,
    next_seq: u64,
}

impl LayoutRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered entries.
    ///
    /// Entries with `size == 0.0` still count; they are registered but
    /// reserve nothing.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are registered.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the given id has a live entry.
    #[must_use]
    #[inline]
    pub fn contains(&self, id: PanelId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Registers or updates the reservation for `id` and returns its leading
    /// offset.
    ///
    /// This is an idempotent upsert: submitting identical values repeatedly
    /// leaves the registry unchanged and returns the same offset. Updating an
    /// existing entry keeps its original registration order, so priority ties
    /// resolve the same way they did when the panel first registered.
    ///
    /// A `size` of `0.0` keeps the entry alive without reserving space; use
    /// it for panels that are currently hidden or overlaying rather than
    /// docked. Sizes must be finite and non-negative.
    pub fn register(&mut self, id: PanelId, edge: Edge, priority: i32, size: f64) -> f64 {
        debug_assert!(
            size.is_finite() && size >= 0.0,
            "reservation size must be finite and non-negative"
        );
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.edge = edge;
                entry.priority = priority;
                entry.size = size;
            }
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                self.entries.insert(
                    id,
                    Reservation {
                        edge,
                        priority,
                        size,
                        seq,
                    },
                );
            }
        }
        self.offset_of(id).unwrap_or(0.0)
    }

    /// Removes the reservation for `id`, returning whether one existed.
    ///
    /// Panels must call this on teardown; a stale entry keeps claiming space
    /// on its edge and mispositions the remaining panels.
    pub fn unregister(&mut self, id: PanelId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Returns the leading offset for a live entry without mutating anything.
    ///
    /// Returns `None` if `id` is not registered.
    #[must_use]
    pub fn offset_of(&self, id: PanelId) -> Option<f64> {
        let entry = self.entries.get(&id)?;
        let offset = self
            .entries
            .iter()
            .filter(|&(&other_id, other)| {
                other_id != id && other.edge == entry.edge && precedes(other, entry)
            })
            .map(|(_, other)| other.size)
            .sum();
        Some(offset)
    }

    /// Returns the total size reserved on an edge.
    ///
    /// This is the amount the surrounding page layout subtracts from its own
    /// extent on behalf of the panels docked there.
    #[must_use]
    pub fn reserved_on(&self, edge: Edge) -> f64 {
        self.entries
            .values()
            .filter(|entry| entry.edge == edge)
            .map(|entry| entry.size)
            .sum()
    }
}

/// Whether `a` binds closer to the edge than `b`.
///
/// Higher priority wins; ties go to the earlier registration.
fn precedes(a: &Reservation, b: &Reservation) -> bool {
    a.priority > b.priority || (a.priority == b.priority && a.seq < b.seq)
}
