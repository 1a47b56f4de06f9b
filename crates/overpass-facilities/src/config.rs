//! Configuration for OverpassClient.

use std::time::Duration;

use locator_core::env::{flag_var, parse_var, string_var};
use locator_core::ConfigError;

/// Default public Overpass interpreter endpoint.
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

/// Default HTTP timeout for a single request.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default `[timeout:N]` budget passed to the Overpass server.
pub const DEFAULT_SERVER_TIMEOUT_SECS: u64 = 25;

/// Default pause before the single retry.
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;

/// Default User-Agent; the public instances ask clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = concat!("hospital-locator/", env!("CARGO_PKG_VERSION"));

/// Configuration for OverpassClient.
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    /// Interpreter endpoint URL.
    pub api_url: String,

    /// Client-side timeout for one HTTP request.
    pub timeout: Duration,

    /// Server-side query budget in seconds.
    pub server_timeout_secs: u64,

    /// Retry once on network errors, 429 and 5xx.
    pub retry_on_transient: bool,

    /// Pause before the retry.
    pub retry_backoff: Duration,

    /// Also match hospitals mapped as ways and relations.
    pub include_areas: bool,

    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_OVERPASS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            server_timeout_secs: DEFAULT_SERVER_TIMEOUT_SECS,
            retry_on_transient: true,
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
            include_areas: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl OverpassConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `OVERPASS_API_URL` - Interpreter URL (default: https://overpass-api.de/api/interpreter)
    /// - `OVERPASS_TIMEOUT_SECS` - HTTP timeout (default: 30)
    /// - `OVERPASS_SERVER_TIMEOUT_SECS` - Server query budget (default: 25)
    /// - `OVERPASS_RETRY` - Retry once on transient failures (default: true)
    /// - `OVERPASS_RETRY_BACKOFF_MS` - Pause before retrying (default: 500)
    /// - `OVERPASS_INCLUDE_AREAS` - Match ways/relations too (default: false)
    /// - `OVERPASS_USER_AGENT` - User-Agent header
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            api_url: string_var("OVERPASS_API_URL").unwrap_or(defaults.api_url),
            timeout: parse_var::<u64>("OVERPASS_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            server_timeout_secs: parse_var("OVERPASS_SERVER_TIMEOUT_SECS")?
                .unwrap_or(defaults.server_timeout_secs),
            retry_on_transient: flag_var("OVERPASS_RETRY")?
                .unwrap_or(defaults.retry_on_transient),
            retry_backoff: parse_var::<u64>("OVERPASS_RETRY_BACKOFF_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_backoff),
            include_areas: flag_var("OVERPASS_INCLUDE_AREAS")?.unwrap_or(defaults.include_areas),
            user_agent: string_var("OVERPASS_USER_AGENT").unwrap_or(defaults.user_agent),
        };

        config.validate()?;
        Ok(config)
    }

    /// Create a new config builder.
    pub fn builder() -> OverpassConfigBuilder {
        OverpassConfigBuilder::default()
    }

    /// Check the settings that would make every request fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "OVERPASS_API_URL",
                format!("expected an http(s) URL, got '{}'", self.api_url),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::invalid("OVERPASS_TIMEOUT_SECS", "must be > 0"));
        }
        if self.server_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "OVERPASS_SERVER_TIMEOUT_SECS",
                "must be > 0",
            ));
        }
        Ok(())
    }
}

/// Builder for OverpassConfig.
#[derive(Debug, Default)]
pub struct OverpassConfigBuilder {
    config: OverpassConfig,
}

impl OverpassConfigBuilder {
    /// Set the interpreter URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the server-side query budget.
    pub fn server_timeout_secs(mut self, secs: u64) -> Self {
        self.config.server_timeout_secs = secs;
        self
    }

    /// Enable or disable the single transient retry.
    pub fn retry_on_transient(mut self, enable: bool) -> Self {
        self.config.retry_on_transient = enable;
        self
    }

    /// Set the pause before retrying.
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.config.retry_backoff = backoff;
        self
    }

    /// Also match hospitals mapped as ways and relations.
    pub fn include_areas(mut self, include: bool) -> Self {
        self.config.include_areas = include;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the configuration.
    pub fn build(self) -> OverpassConfig {
        self.config
    }
}
