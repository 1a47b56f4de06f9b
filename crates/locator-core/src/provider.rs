//! Collaborator traits for position acquisition and facility lookup.

use async_trait::async_trait;

use crate::coordinate::Coordinate;
use crate::error::{GeoFailure, QueryFailure};
use crate::facility::Facility;

/// A single-shot source of the user's current position.
///
/// Implementations wrap whatever location service the host offers. A call
/// may trigger a permission prompt the first time it runs. There is no
/// watch or polling mode: each call is one request.
///
/// This trait is object-safe and can be used with `Arc<dyn GeoPositionProvider>`.
#[async_trait]
pub trait GeoPositionProvider: Send + Sync {
    /// Request the current position.
    async fn acquire(&self) -> Result<Coordinate, GeoFailure>;

    /// Get a human-readable name for this provider.
    fn name(&self) -> &str;
}

/// A geospatial lookup for hospitals around a point.
///
/// Results keep the order the source returned them in. Records that fail
/// validation are dropped individually; only transport, status, or
/// payload-shape problems fail the whole query.
#[async_trait]
pub trait FacilityQueryClient: Send + Sync {
    /// Find hospitals within `radius_meters` of `center`.
    async fn query(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Facility>, QueryFailure>;

    /// Get a human-readable name for this client.
    fn name(&self) -> &str;
}
