//! NearestFacilityResolver: position → query → nearest → publish.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use ip_geolocation::IpGeolocationProvider;
use locator_core::{
    ConfigError, Coordinate, FacilityQueryClient, GeoFailure, GeoPositionProvider,
};
use overpass_facilities::OverpassClient;
use tokio::sync::watch;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::config::LocatorConfig;
use crate::phase::{ResolveOutcome, ResolvePhase};
use crate::state::{LocatorSnapshot, LocatorState};

/// Orchestrates position acquisition, the hospital query and the
/// nearest-facility reduction, and owns the [`LocatorState`] it publishes to.
///
/// Every call takes a new generation number. A call only writes to the
/// state or the phase while its generation is still the latest issued, so
/// when calls overlap the most recently issued one wins regardless of which
/// finishes last.
pub struct NearestFacilityResolver {
    provider: Arc<dyn GeoPositionProvider>,
    client: Arc<dyn FacilityQueryClient>,
    config: LocatorConfig,
    state: LocatorState,
    phase: watch::Sender<ResolvePhase>,
    generation: AtomicU64,
    resolved_once: AtomicBool,
}

impl NearestFacilityResolver {
    /// Create a resolver with the given collaborators.
    pub fn new(
        config: LocatorConfig,
        provider: Arc<dyn GeoPositionProvider>,
        client: Arc<dyn FacilityQueryClient>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let (phase, _rx) = watch::channel(ResolvePhase::Idle);

        info!(
            "Locator initialized with provider: {}, client: {}, radius: {} m, fallback: {}",
            provider.name(),
            client.name(),
            config.radius_meters,
            config.fallback_position
        );

        Ok(Self {
            provider,
            client,
            state: LocatorState::new(config.fallback_position),
            config,
            phase,
            generation: AtomicU64::new(0),
            resolved_once: AtomicBool::new(false),
        })
    }

    /// Create a resolver from environment variables, using IP geolocation
    /// for the position and the Overpass API for hospitals.
    ///
    /// See [`LocatorConfig::from_env`], `OverpassConfig::from_env` and
    /// `IpGeolocationConfig::from_env` for the variables read.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = LocatorConfig::from_env()?;
        let provider = Arc::new(IpGeolocationProvider::from_env()?);
        let client = Arc::new(OverpassClient::from_env()?);
        Self::new(config, provider, client)
    }

    /// Get the configuration.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// The state this resolver publishes to.
    pub fn state(&self) -> &LocatorState {
        &self.state
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> LocatorSnapshot {
        self.state.snapshot()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<LocatorSnapshot> {
        self.state.subscribe()
    }

    /// Current phase.
    pub fn phase(&self) -> ResolvePhase {
        *self.phase.borrow()
    }

    /// Receiver notified on every phase change.
    pub fn subscribe_phase(&self) -> watch::Receiver<ResolvePhase> {
        self.phase.subscribe()
    }

    /// Acquire the user's position, then find the nearest hospital to it.
    ///
    /// On a position failure the fallback stays in effect and no query is
    /// issued. On success the new position is published straight away
    /// (nearest recomputed over the current facilities) and the query runs.
    pub async fn locate_and_resolve(&self) -> ResolveOutcome {
        let generation = self.begin();
        self.set_phase(generation, ResolvePhase::Locating);

        let acquired = match timeout(self.config.geolocation_timeout, self.provider.acquire()).await
        {
            Ok(result) => result,
            Err(_) => Err(GeoFailure::Timeout),
        };

        let position = match acquired {
            Ok(position) => position,
            Err(failure) => {
                warn!(
                    provider = self.provider.name(),
                    "Geolocation failed, keeping {}: {}",
                    self.snapshot().current_position(),
                    failure
                );
                if !self.set_phase(generation, ResolvePhase::LocationFailed) {
                    return ResolveOutcome::Superseded;
                }
                return ResolveOutcome::LocationFailed(failure);
            }
        };

        info!(position = %position, "Position acquired");

        let moved = self.state.publish_if(
            || self.is_current(generation),
            |snapshot| snapshot.with_position(position),
        );
        if !moved {
            debug!(generation, "Discarding superseded position");
            return ResolveOutcome::Superseded;
        }

        self.query_and_publish(generation, position).await
    }

    /// Find the nearest hospital to a known position.
    ///
    /// `center` becomes the published current position together with the
    /// results; nothing is published if the query fails.
    pub async fn resolve(&self, center: Coordinate) -> ResolveOutcome {
        let generation = self.begin();
        self.query_and_publish(generation, center).await
    }

    async fn query_and_publish(&self, generation: u64, center: Coordinate) -> ResolveOutcome {
        self.set_phase(generation, ResolvePhase::Querying);

        let facilities = match self.client.query(center, self.config.radius_meters).await {
            Ok(facilities) => facilities,
            Err(failure) => {
                warn!(
                    client = self.client.name(),
                    center = %center,
                    "Facility query failed, keeping previous results: {}",
                    failure
                );
                let previous = if self.resolved_once.load(Ordering::SeqCst) {
                    ResolvePhase::Resolved
                } else {
                    ResolvePhase::Idle
                };
                self.set_phase(generation, previous);
                return ResolveOutcome::QueryFailed(failure);
            }
        };

        let next = LocatorSnapshot::new(center, facilities);
        let facility_count = next.facilities().len();
        let nearest = next.nearest().cloned();
        let distance = next.nearest_distance();

        let published = self
            .state
            .publish_if(|| self.is_current(generation), move |_| next);
        if !published {
            debug!(generation, "Discarding superseded results");
            return ResolveOutcome::Superseded;
        }

        self.resolved_once.store(true, Ordering::SeqCst);
        self.set_phase(generation, ResolvePhase::Resolved);

        match (&nearest, distance) {
            (Some(facility), Some(meters)) => info!(
                facility_count,
                "Nearest hospital: {} at {} ({})", facility.name, facility.position, meters
            ),
            _ => info!(center = %center, "No hospitals within {} m", self.config.radius_meters),
        }

        ResolveOutcome::Resolved {
            facility_count,
            nearest,
            distance,
        }
    }

    /// Issue a new generation number.
    fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Move to `phase` if `generation` is still current; returns whether it was.
    fn set_phase(&self, generation: u64, phase: ResolvePhase) -> bool {
        let mut current = false;
        self.phase.send_if_modified(|held| {
            if !self.is_current(generation) {
                return false;
            }
            current = true;
            let changed = *held != phase;
            *held = phase;
            changed
        });
        current
    }
}
