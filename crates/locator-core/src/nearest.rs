//! Nearest-facility reduction.

use crate::coordinate::Coordinate;
use crate::distance::{distance, DistanceMeters};
use crate::facility::Facility;

/// Find the facility closest to `center`.
///
/// Returns the index into `facilities` and its distance, or `None` for an
/// empty slice. This is a left fold with a strict comparison, so when two
/// facilities are equally close the one earlier in source order wins.
pub fn nearest_facility(
    center: Coordinate,
    facilities: &[Facility],
) -> Option<(usize, DistanceMeters)> {
    facilities
        .iter()
        .enumerate()
        .map(|(index, facility)| (index, distance(center, facility.position)))
        .fold(None, |best, (index, meters)| match best {
            None => Some((index, meters)),
            Some((_, best_meters)) if meters < best_meters => Some((index, meters)),
            keep => keep,
        })
}
