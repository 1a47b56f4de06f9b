//! Configuration for the IP geolocation provider.

use std::time::Duration;

use locator_core::env::{parse_var, string_var};
use locator_core::ConfigError;

/// Default ip-api JSON endpoint (looks up the caller's address).
pub const DEFAULT_IPGEO_URL: &str = "http://ip-api.com/json";

/// Default HTTP timeout.
pub const DEFAULT_IPGEO_TIMEOUT_SECS: u64 = 5;

/// Configuration for IpGeolocationProvider.
#[derive(Debug, Clone)]
pub struct IpGeolocationConfig {
    /// Lookup endpoint URL.
    pub api_url: String,

    /// HTTP timeout.
    pub timeout: Duration,
}

impl Default for IpGeolocationConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_IPGEO_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_IPGEO_TIMEOUT_SECS),
        }
    }
}

impl IpGeolocationConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `IPGEO_API_URL` - Lookup URL (default: http://ip-api.com/json)
    /// - `IPGEO_TIMEOUT_SECS` - HTTP timeout (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let timeout = match parse_var::<u64>("IPGEO_TIMEOUT_SECS")? {
            Some(0) => return Err(ConfigError::invalid("IPGEO_TIMEOUT_SECS", "must be > 0")),
            Some(secs) => Duration::from_secs(secs),
            None => defaults.timeout,
        };

        Ok(Self {
            api_url: string_var("IPGEO_API_URL").unwrap_or(defaults.api_url),
            timeout,
        })
    }

    /// Set the lookup URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
