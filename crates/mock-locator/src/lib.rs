//! Mock collaborators for the hospital locator.
//!
//! This crate provides deterministic implementations of the locator traits
//! for testing:
//! - `FixedPosition` / `FailingPosition` - Position providers with a canned answer
//! - `StaticFacilities` - Always returns the same facility list
//! - `FailingFacilities` - Always fails with the given `QueryFailure`
//! - `ScriptedFacilities` - Returns a sequence of results, one per call
//! - `DelayedPosition` / `DelayedFacilities` - Wrap another mock with artificial delay
//!
//! Every facility mock records how often it was called and with which
//! arguments, so tests can assert that no query was issued.
//!
//! For production lookups, use the `overpass-facilities` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_locator::{Coordinate, Facility, FacilityQueryClient, StaticFacilities};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_locator::QueryFailure> {
//!     let here = Coordinate::new(12.9716, 77.5946).unwrap();
//!     let client = StaticFacilities::new(vec![Facility::new("Clinic", here)]);
//!
//!     let found = client.query(here, 5000.0).await?;
//!     assert_eq!(found.len(), 1);
//!     assert_eq!(client.calls(), 1);
//!     Ok(())
//! }
//! ```

// Mock implementations
mod delayed;
mod facilities;
mod position;

// Re-export locator-core types for convenience
pub use locator_core::{
    async_trait, Coordinate, Facility, FacilityQueryClient, GeoFailure, GeoPositionProvider,
    QueryFailure,
};

// Export mock implementations
pub use delayed::{DelayedFacilities, DelayedPosition};
pub use facilities::{FailingFacilities, QueryRecord, ScriptedFacilities, StaticFacilities};
pub use position::{FailingPosition, FixedPosition};
