//! Canned facility query clients.

use std::collections::VecDeque;

use locator_core::{async_trait, Coordinate, Facility, FacilityQueryClient, QueryFailure};
use tokio::sync::Mutex;

/// Arguments of one `query` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryRecord {
    pub center: Coordinate,
    pub radius_meters: f64,
}

/// Call log shared by the facility mocks.
#[derive(Debug, Default)]
struct CallLog {
    records: std::sync::Mutex<Vec<QueryRecord>>,
}

impl CallLog {
    fn record(&self, center: Coordinate, radius_meters: f64) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.push(QueryRecord {
            center,
            radius_meters,
        });
    }

    fn records(&self) -> Vec<QueryRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// A client that always returns the same facilities.
#[derive(Debug, Default)]
pub struct StaticFacilities {
    facilities: Vec<Facility>,
    log: CallLog,
}

impl StaticFacilities {
    /// Create a client that answers every query with `facilities`.
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self {
            facilities,
            log: CallLog::default(),
        }
    }

    /// Create a client that never finds anything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of `query` calls so far.
    pub fn calls(&self) -> usize {
        self.log.records().len()
    }

    /// All recorded calls, oldest first.
    pub fn records(&self) -> Vec<QueryRecord> {
        self.log.records()
    }
}

#[async_trait]
impl FacilityQueryClient for StaticFacilities {
    async fn query(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Facility>, QueryFailure> {
        self.log.record(center, radius_meters);
        Ok(self.facilities.clone())
    }

    fn name(&self) -> &str {
        "StaticFacilities"
    }
}

/// A client that always fails.
#[derive(Debug)]
pub struct FailingFacilities {
    failure: QueryFailure,
    log: CallLog,
}

impl FailingFacilities {
    /// Create a client that fails every query with `failure`.
    pub fn new(failure: QueryFailure) -> Self {
        Self {
            failure,
            log: CallLog::default(),
        }
    }

    /// Number of `query` calls so far.
    pub fn calls(&self) -> usize {
        self.log.records().len()
    }
}

#[async_trait]
impl FacilityQueryClient for FailingFacilities {
    async fn query(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Facility>, QueryFailure> {
        self.log.record(center, radius_meters);
        Err(self.failure.clone())
    }

    fn name(&self) -> &str {
        "FailingFacilities"
    }
}

/// A client that plays back a fixed sequence of results.
///
/// Once the script runs out every further call fails with
/// `QueryFailure::Network("script exhausted")`.
#[derive(Debug)]
pub struct ScriptedFacilities {
    script: Mutex<VecDeque<Result<Vec<Facility>, QueryFailure>>>,
    log: CallLog,
}

impl ScriptedFacilities {
    /// Create a client that returns `script` entries in order.
    pub fn new(script: Vec<Result<Vec<Facility>, QueryFailure>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            log: CallLog::default(),
        }
    }

    /// Number of `query` calls so far.
    pub fn calls(&self) -> usize {
        self.log.records().len()
    }

    /// All recorded calls, oldest first.
    pub fn records(&self) -> Vec<QueryRecord> {
        self.log.records()
    }
}

#[async_trait]
impl FacilityQueryClient for ScriptedFacilities {
    async fn query(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Facility>, QueryFailure> {
        self.log.record(center, radius_meters);
        self.script
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(QueryFailure::Network("script exhausted".to_string())))
    }

    fn name(&self) -> &str {
        "ScriptedFacilities"
    }
}
