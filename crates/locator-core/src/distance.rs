//! Great-circle distance using the haversine formula.

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

use crate::coordinate::Coordinate;

/// Mean Earth radius used by [`distance`], in meters.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A non-negative distance in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DistanceMeters(pub f64);

impl DistanceMeters {
    /// Zero distance.
    pub const ZERO: Self = Self(0.0);

    /// Get the distance in meters.
    #[inline]
    pub fn meters(&self) -> f64 {
        self.0
    }

    /// Get the distance in kilometers.
    #[inline]
    pub fn kilometers(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl PartialOrd for DistanceMeters {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl fmt::Display for DistanceMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 1000.0 {
            write!(f, "{:.2} km", self.kilometers())
        } else {
            write!(f, "{:.0} m", self.0)
        }
    }
}

#[inline]
fn to_radians(degrees: f64) -> f64 {
    (degrees * PI) / 180.0
}

/// Calculate the great-circle distance between two coordinates.
///
/// Squares are computed as `sin(x) * sin(x)` and the central angle as
/// `atan2(√h, √(1-h))`. Keep this evaluation order: nearest-facility
/// results compare these values directly.
///
/// # Example
///
/// ```
/// use locator_core::{distance, Coordinate};
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(1.0, 0.0).unwrap();
/// let meters = distance(a, b).meters();
/// assert!((meters - 111_194.93).abs() < 0.01);
/// ```
pub fn distance(a: Coordinate, b: Coordinate) -> DistanceMeters {
    let phi1 = to_radians(a.latitude());
    let phi2 = to_radians(b.latitude());
    let delta_phi = to_radians(b.latitude() - a.latitude());
    let delta_lambda = to_radians(b.longitude() - a.longitude());

    let half_phi = (delta_phi / 2.0).sin();
    let half_lambda = (delta_lambda / 2.0).sin();
    let h = half_phi * half_phi + phi1.cos() * phi2.cos() * half_lambda * half_lambda;
    // Rounding can push h just past 1 for near-antipodal points.
    let h = h.min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    DistanceMeters(EARTH_RADIUS_METERS * c)
}
