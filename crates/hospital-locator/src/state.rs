//! Observable locator state.
//!
//! [`LocatorSnapshot`] is the full, internally consistent view the map
//! layer renders. Its fields are private and it can only be built from a
//! `(position, facilities)` pair, so the nearest facility is always derived
//! from exactly the data it sits next to.
//!
//! [`LocatorState`] holds the current snapshot in a `tokio::sync::watch`
//! channel. Readers get whole snapshots; the resolver is the only writer.

use locator_core::{nearest_facility, Coordinate, DistanceMeters, Facility};
use tokio::sync::watch;

/// Consistent view of position, facilities and the nearest facility.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorSnapshot {
    current_position: Coordinate,
    facilities: Vec<Facility>,
    nearest: Option<(usize, DistanceMeters)>,
}

impl LocatorSnapshot {
    /// Build a snapshot, deriving the nearest facility.
    pub fn new(current_position: Coordinate, facilities: Vec<Facility>) -> Self {
        let nearest = nearest_facility(current_position, &facilities);
        Self {
            current_position,
            facilities,
            nearest,
        }
    }

    /// The same facilities seen from a different position.
    pub fn with_position(&self, position: Coordinate) -> Self {
        Self::new(position, self.facilities.clone())
    }

    /// Position the snapshot is relative to.
    pub fn current_position(&self) -> Coordinate {
        self.current_position
    }

    /// Facilities in source order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// The closest facility, `None` iff there are no facilities.
    pub fn nearest(&self) -> Option<&Facility> {
        self.nearest.map(|(index, _)| &self.facilities[index])
    }

    /// Position of the nearest facility within [`facilities`](Self::facilities).
    pub fn nearest_index(&self) -> Option<usize> {
        self.nearest.map(|(index, _)| index)
    }

    /// Distance from the current position to the nearest facility.
    pub fn nearest_distance(&self) -> Option<DistanceMeters> {
        self.nearest.map(|(_, meters)| meters)
    }
}

/// Single-writer, multi-reader holder of the current [`LocatorSnapshot`].
#[derive(Debug)]
pub struct LocatorState {
    tx: watch::Sender<LocatorSnapshot>,
}

impl LocatorState {
    /// Start at `fallback` with no facilities.
    pub fn new(fallback: Coordinate) -> Self {
        let (tx, _rx) = watch::channel(LocatorSnapshot::new(fallback, Vec::new()));
        Self { tx }
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> LocatorSnapshot {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every published change.
    pub fn subscribe(&self) -> watch::Receiver<LocatorSnapshot> {
        self.tx.subscribe()
    }

    /// Replace the snapshot if `is_current` still holds.
    ///
    /// `is_current` is evaluated while the channel is locked, so a check
    /// and its publish cannot interleave with another publish.
    pub(crate) fn publish_if(
        &self,
        is_current: impl FnOnce() -> bool,
        update: impl FnOnce(&LocatorSnapshot) -> LocatorSnapshot,
    ) -> bool {
        let mut published = false;
        self.tx.send_if_modified(|snapshot| {
            if !is_current() {
                return false;
            }
            let next = update(snapshot);
            published = true;
            if next == *snapshot {
                return false;
            }
            *snapshot = next;
            true
        });
        published
    }
}
