//! Overpass API hospital lookup.
//!
//! This crate provides [`OverpassClient`], a [`FacilityQueryClient`] that
//! finds OpenStreetMap features tagged `amenity=hospital` around a point.
//!
//! # Features
//!
//! - Node-only queries by default; optional ways/relations via `out center;`
//! - Validated parsing: bad records are dropped, bad payloads fail the query
//! - One bounded retry on network errors, 429 and 5xx
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use overpass_facilities::{Coordinate, FacilityQueryClient, OverpassClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OverpassClient::from_env()?;
//!     let center = Coordinate::new(12.9716, 77.5946)?;
//!     let hospitals = client.query(center, 5000.0).await?;
//!     println!("{} hospitals nearby", hospitals.len());
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;
mod query;

pub use api_types::parse_facilities;
pub use client::OverpassClient;
pub use config::{OverpassConfig, OverpassConfigBuilder, DEFAULT_OVERPASS_URL};
pub use query::build_query;

// Re-export locator-core types for convenience
pub use locator_core::{
    async_trait, ConfigError, Coordinate, Facility, FacilityQueryClient, QueryFailure,
};
