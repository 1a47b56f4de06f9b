//! Geographic coordinate value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// A WGS84 position in decimal degrees.
///
/// Values are only constructed through [`Coordinate::new`], so every
/// `Coordinate` in the system is finite and within range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, validating that both components are finite and
    /// within `[-90, 90]` / `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a coordinate from constant components.
    ///
    /// Used for compile-time defaults: in a `const` item an out-of-range
    /// or NaN component is a build error rather than a runtime one.
    ///
    /// # Panics
    ///
    /// Panics when called at runtime with components [`Coordinate::new`]
    /// would reject.
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        assert!(
            latitude >= -90.0 && latitude <= 90.0,
            "latitude outside [-90, 90]"
        );
        assert!(
            longitude >= -180.0 && longitude <= 180.0,
            "longitude outside [-180, 180]"
        );
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude in degrees.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.latitude, self.longitude)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = CoordinateError;

    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Self::new(latitude, longitude)
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        let coord = Coordinate::new(12.9716, 77.5946).unwrap();
        assert_eq!(coord.latitude(), 12.9716);
        assert_eq!(coord.longitude(), 77.5946);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            Coordinate::new(90.5, 0.0),
            Err(CoordinateError::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Coordinate::new(0.0, -180.01),
            Err(CoordinateError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(CoordinateError::NonFinite)
        ));
        assert!(matches!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(CoordinateError::NonFinite)
        ));
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Coordinate =
            serde_json::from_str(r#"{"latitude": 51.5, "longitude": -0.12}"#).unwrap();
        assert_eq!(ok.latitude(), 51.5);

        let bad = serde_json::from_str::<Coordinate>(r#"{"latitude": 123.0, "longitude": 0.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_const_constructor() {
        const BANGALORE: Coordinate = Coordinate::from_degrees(12.9716, 77.5946);
        assert_eq!(BANGALORE, Coordinate::new(12.9716, 77.5946).unwrap());
    }

    #[test]
    #[should_panic(expected = "latitude outside")]
    fn test_const_constructor_rejects_nan() {
        Coordinate::from_degrees(f64::NAN, 0.0);
    }

    #[test]
    fn test_display() {
        let coord = Coordinate::new(12.9716, 77.5946).unwrap();
        assert_eq!(coord.to_string(), "(12.97160, 77.59460)");
    }
}
