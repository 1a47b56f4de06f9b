//! IP-based position provider.
//!
//! Hosts without a platform location service can still approximate the
//! user's position from their public IP address. [`IpGeolocationProvider`]
//! implements [`GeoPositionProvider`] against an ip-api style JSON endpoint.
//!
//! City-level accuracy at best; good enough to seed a 5 km hospital search,
//! not to navigate.

mod config;
mod provider;

pub use config::{IpGeolocationConfig, DEFAULT_IPGEO_URL};
pub use provider::IpGeolocationProvider;

// Re-export locator-core types for convenience
pub use locator_core::{async_trait, ConfigError, Coordinate, GeoFailure, GeoPositionProvider};
