//! Core types and traits for the hospital locator.
//!
//! This crate provides the shared vocabulary used by every locator crate:
//!
//! - [`Coordinate`] / [`Facility`] - Validated value types
//! - [`distance`] / [`DistanceMeters`] - Haversine great-circle distance
//! - [`nearest_facility`] - Left-fold reduction to the closest facility
//! - [`GeoPositionProvider`] / [`FacilityQueryClient`] - Collaborator traits
//! - [`GeoFailure`] / [`QueryFailure`] - Recoverable failure kinds
//! - [`env`] - Helpers shared by the `from_env` constructors
//!
//! # Example
//!
//! ```rust
//! use locator_core::{distance, nearest_facility, Coordinate, Facility};
//!
//! let center = Coordinate::new(12.9716, 77.5946).unwrap();
//! let facilities = vec![
//!     Facility::new("A", Coordinate::new(12.98, 77.60).unwrap()),
//!     Facility::new("B", Coordinate::new(12.975, 77.598).unwrap()),
//! ];
//!
//! let (index, meters) = nearest_facility(center, &facilities).unwrap();
//! assert_eq!(facilities[index].name, "B");
//! assert_eq!(meters, distance(center, facilities[1].position));
//! ```

mod coordinate;
mod distance;
pub mod env;
mod error;
mod facility;
mod nearest;
mod provider;

pub use coordinate::Coordinate;
pub use distance::{distance, DistanceMeters, EARTH_RADIUS_METERS};
pub use error::{ConfigError, CoordinateError, GeoFailure, QueryFailure};
pub use facility::{Facility, UNKNOWN_FACILITY_NAME};
pub use nearest::nearest_facility;
pub use provider::{FacilityQueryClient, GeoPositionProvider};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
