//! Resolution phases and outcomes.

use std::fmt;

use locator_core::{DistanceMeters, Facility, GeoFailure, QueryFailure};

/// Where the resolver is in its `Idle → Locating → Querying → Resolved` cycle.
///
/// A failed query is not a resting phase: the resolver reverts to the phase
/// it held before the attempt (`Resolved` if results were ever published,
/// otherwise `Idle`) and reports the failure through
/// [`ResolveOutcome::QueryFailed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePhase {
    /// Nothing resolved yet.
    #[default]
    Idle,
    /// Waiting on the position provider.
    Locating,
    /// Waiting on the facility query.
    Querying,
    /// Results are published.
    Resolved,
    /// The position request failed; the fallback stays in effect.
    LocationFailed,
}

impl fmt::Display for ResolvePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Locating => write!(f, "Locating"),
            Self::Querying => write!(f, "Querying"),
            Self::Resolved => write!(f, "Resolved"),
            Self::LocationFailed => write!(f, "LocationFailed"),
        }
    }
}

/// What a single `resolve` / `locate_and_resolve` call ended with.
///
/// Failures are reported here rather than as `Err`: they have already been
/// handled by leaving the state at its last good value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveOutcome {
    /// New results were published.
    Resolved {
        facility_count: usize,
        nearest: Option<Facility>,
        distance: Option<DistanceMeters>,
    },
    /// The position request failed; no query was issued.
    LocationFailed(GeoFailure),
    /// The facility query failed; the state is unchanged.
    QueryFailed(QueryFailure),
    /// A later call was issued before this one finished; its result was discarded.
    Superseded,
}

impl ResolveOutcome {
    /// Whether this call published new results.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
}
