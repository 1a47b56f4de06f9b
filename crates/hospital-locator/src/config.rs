//! Configuration for the locator.

use std::time::Duration;

use locator_core::env::parse_var;
use locator_core::{ConfigError, Coordinate};

/// Fallback latitude used until geolocation succeeds (Bangalore city centre).
pub const DEFAULT_FALLBACK_LATITUDE: f64 = 12.9716;

/// Fallback longitude used until geolocation succeeds (Bangalore city centre).
pub const DEFAULT_FALLBACK_LONGITUDE: f64 = 77.5946;

/// Position used until geolocation succeeds.
pub const DEFAULT_FALLBACK_POSITION: Coordinate =
    Coordinate::from_degrees(DEFAULT_FALLBACK_LATITUDE, DEFAULT_FALLBACK_LONGITUDE);

/// Default hospital search radius.
pub const DEFAULT_RADIUS_METERS: f64 = 5000.0;

/// Default upper bound on a single position request.
pub const DEFAULT_GEOLOCATION_TIMEOUT_SECS: u64 = 10;

/// Configuration for NearestFacilityResolver.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorConfig {
    /// Position shown before (or instead of) a live fix.
    pub fallback_position: Coordinate,

    /// Search radius around the position, in meters.
    pub radius_meters: f64,

    /// Give up on the position provider after this long.
    pub geolocation_timeout: Duration,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            fallback_position: DEFAULT_FALLBACK_POSITION,
            radius_meters: DEFAULT_RADIUS_METERS,
            geolocation_timeout: Duration::from_secs(DEFAULT_GEOLOCATION_TIMEOUT_SECS),
        }
    }
}

impl LocatorConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOCATOR_FALLBACK_LAT` - Fallback latitude (default: 12.9716)
    /// - `LOCATOR_FALLBACK_LNG` - Fallback longitude (default: 77.5946)
    /// - `LOCATOR_RADIUS_METERS` - Search radius (default: 5000)
    /// - `LOCATOR_GEOLOCATION_TIMEOUT_SECS` - Position request bound (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let latitude = parse_var("LOCATOR_FALLBACK_LAT")?.unwrap_or(DEFAULT_FALLBACK_LATITUDE);
        let longitude =
            parse_var("LOCATOR_FALLBACK_LNG")?.unwrap_or(DEFAULT_FALLBACK_LONGITUDE);
        let fallback_position = Coordinate::new(latitude, longitude)
            .map_err(|e| ConfigError::invalid("LOCATOR_FALLBACK_LAT/LNG", e.to_string()))?;

        let config = Self {
            fallback_position,
            radius_meters: parse_var("LOCATOR_RADIUS_METERS")?.unwrap_or(DEFAULT_RADIUS_METERS),
            geolocation_timeout: Duration::from_secs(
                parse_var("LOCATOR_GEOLOCATION_TIMEOUT_SECS")?
                    .unwrap_or(DEFAULT_GEOLOCATION_TIMEOUT_SECS),
            ),
        };

        config.validate()?;
        Ok(config)
    }

    /// Create a new config builder.
    pub fn builder() -> LocatorConfigBuilder {
        LocatorConfigBuilder::default()
    }

    /// Reject settings that can never produce a useful search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius_meters.is_finite() || self.radius_meters <= 0.0 {
            return Err(ConfigError::invalid(
                "LOCATOR_RADIUS_METERS",
                format!("must be a positive number, got {}", self.radius_meters),
            ));
        }
        if self.geolocation_timeout.is_zero() {
            return Err(ConfigError::invalid(
                "LOCATOR_GEOLOCATION_TIMEOUT_SECS",
                "must be > 0",
            ));
        }
        Ok(())
    }
}

/// Builder for LocatorConfig.
#[derive(Debug, Default)]
pub struct LocatorConfigBuilder {
    config: LocatorConfig,
}

impl LocatorConfigBuilder {
    /// Set the fallback position.
    pub fn fallback_position(mut self, position: Coordinate) -> Self {
        self.config.fallback_position = position;
        self
    }

    /// Set the search radius in meters.
    pub fn radius_meters(mut self, radius: f64) -> Self {
        self.config.radius_meters = radius;
        self
    }

    /// Set the position request bound.
    pub fn geolocation_timeout(mut self, timeout: Duration) -> Self {
        self.config.geolocation_timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> LocatorConfig {
        self.config
    }
}
