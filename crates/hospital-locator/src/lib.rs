//! Nearest-hospital resolver.
//!
//! This crate ties the locator collaborators together:
//!
//! - [`NearestFacilityResolver`] - Acquires a position, queries hospitals around
//!   it and publishes the nearest one
//! - [`LocatorState`] / [`LocatorSnapshot`] - Observable, always-consistent state
//! - [`ResolvePhase`] / [`ResolveOutcome`] - Progress and per-call results
//! - [`MapOverlay`] - Marker and route description for a map view
//!
//! Position and facility sources are pluggable through the
//! [`GeoPositionProvider`] and [`FacilityQueryClient`] traits. The defaults
//! used by [`NearestFacilityResolver::from_env`] are IP geolocation and the
//! Overpass API.
//!
//! # Example
//!
//! ```rust,no_run
//! use hospital_locator::{MapOverlay, NearestFacilityResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = NearestFacilityResolver::from_env()?;
//!
//!     let outcome = resolver.locate_and_resolve().await;
//!     println!("{:?}", outcome);
//!
//!     let overlay = MapOverlay::from_snapshot(&resolver.snapshot());
//!     println!("{} markers", overlay.markers.len());
//!     Ok(())
//! }
//! ```

mod config;
mod overlay;
mod phase;
mod resolver;
mod state;

pub use config::{
    LocatorConfig, LocatorConfigBuilder, DEFAULT_FALLBACK_LATITUDE, DEFAULT_FALLBACK_LONGITUDE,
    DEFAULT_FALLBACK_POSITION, DEFAULT_GEOLOCATION_TIMEOUT_SECS, DEFAULT_RADIUS_METERS,
};
pub use overlay::{
    MapMarker, MapOverlay, MarkerKind, RouteLine, DEFAULT_MAP_ZOOM, USER_MARKER_LABEL,
};
pub use phase::{ResolveOutcome, ResolvePhase};
pub use resolver::NearestFacilityResolver;
pub use state::{LocatorSnapshot, LocatorState};

// Re-export locator-core types for convenience
pub use locator_core::{
    async_trait, distance, ConfigError, Coordinate, DistanceMeters, Facility,
    FacilityQueryClient, GeoFailure, GeoPositionProvider, QueryFailure,
};
