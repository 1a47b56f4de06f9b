//! Canned position providers.

use std::sync::atomic::{AtomicUsize, Ordering};

use locator_core::{async_trait, Coordinate, GeoFailure, GeoPositionProvider};

/// A provider that always reports the same position.
#[derive(Debug)]
pub struct FixedPosition {
    position: Coordinate,
    calls: AtomicUsize,
}

impl FixedPosition {
    /// Create a provider that answers with `position`.
    pub fn new(position: Coordinate) -> Self {
        Self {
            position,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `acquire` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeoPositionProvider for FixedPosition {
    async fn acquire(&self) -> Result<Coordinate, GeoFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.position)
    }

    fn name(&self) -> &str {
        "FixedPosition"
    }
}

/// A provider that always fails with the same reason.
#[derive(Debug)]
pub struct FailingPosition {
    failure: GeoFailure,
    calls: AtomicUsize,
}

impl FailingPosition {
    /// Create a provider that fails with `failure`.
    pub fn new(failure: GeoFailure) -> Self {
        Self {
            failure,
            calls: AtomicUsize::new(0),
        }
    }

    /// Shorthand for a permission-denied provider.
    pub fn denied() -> Self {
        Self::new(GeoFailure::PermissionDenied)
    }

    /// Number of `acquire` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeoPositionProvider for FailingPosition {
    async fn acquire(&self) -> Result<Coordinate, GeoFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(self.failure.clone())
    }

    fn name(&self) -> &str {
        "FailingPosition"
    }
}
