//! Delayed wrappers - add artificial latency to another collaborator.

use std::time::Duration;

use locator_core::{
    async_trait, Coordinate, Facility, FacilityQueryClient, GeoFailure, GeoPositionProvider,
    QueryFailure,
};
use tokio::time::sleep;

/// A position provider that waits before delegating.
///
/// Useful for exercising the geolocation timeout.
pub struct DelayedPosition<P: GeoPositionProvider> {
    inner: P,
    delay: Duration,
}

impl<P: GeoPositionProvider> DelayedPosition<P> {
    /// Wrap `inner` with the given delay.
    pub fn new(inner: P, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Wrap `inner` with a delay in milliseconds.
    pub fn with_millis(inner: P, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<P: GeoPositionProvider> GeoPositionProvider for DelayedPosition<P> {
    async fn acquire(&self) -> Result<Coordinate, GeoFailure> {
        sleep(self.delay).await;
        self.inner.acquire().await
    }

    fn name(&self) -> &str {
        "DelayedPosition"
    }
}

/// A facility client that waits before delegating.
///
/// Useful for overlapping resolutions where an earlier call finishes last.
pub struct DelayedFacilities<C: FacilityQueryClient> {
    inner: C,
    delay: Duration,
}

impl<C: FacilityQueryClient> DelayedFacilities<C> {
    /// Wrap `inner` with the given delay.
    pub fn new(inner: C, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Wrap `inner` with a delay in milliseconds.
    pub fn with_millis(inner: C, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Get the wrapped client.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: FacilityQueryClient> FacilityQueryClient for DelayedFacilities<C> {
    async fn query(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Facility>, QueryFailure> {
        sleep(self.delay).await;
        self.inner.query(center, radius_meters).await
    }

    fn name(&self) -> &str {
        "DelayedFacilities"
    }
}
