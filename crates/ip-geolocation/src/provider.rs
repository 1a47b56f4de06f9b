//! IpGeolocationProvider implementation.

use locator_core::{async_trait, ConfigError, Coordinate, GeoFailure, GeoPositionProvider};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::IpGeolocationConfig;

/// ip-api style lookup response.
///
/// Only the fields needed for a position are deserialized.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

/// Position provider backed by an IP geolocation service.
pub struct IpGeolocationProvider {
    client: Client,
    config: IpGeolocationConfig,
}

impl IpGeolocationProvider {
    /// Create a new provider with the given configuration.
    pub fn new(config: IpGeolocationConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        info!(
            "IpGeolocationProvider initialized with endpoint: {}",
            config.api_url
        );

        Ok(Self { client, config })
    }

    /// Create a provider from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(IpGeolocationConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &IpGeolocationConfig {
        &self.config
    }
}

#[async_trait]
impl GeoPositionProvider for IpGeolocationProvider {
    async fn acquire(&self) -> Result<Coordinate, GeoFailure> {
        let response = self
            .client
            .get(&self.config.api_url)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoFailure::PositionUnavailable(format!(
                "lookup returned status {}",
                status.as_u16()
            )));
        }

        let bytes = response.bytes().await.map_err(transport_failure)?;
        let position = interpret_response(&bytes)?;

        debug!(position = %position, "IP geolocation resolved");
        Ok(position)
    }

    fn name(&self) -> &str {
        "IpGeolocationProvider"
    }
}

fn transport_failure(e: reqwest::Error) -> GeoFailure {
    if e.is_timeout() {
        GeoFailure::Timeout
    } else {
        GeoFailure::PositionUnavailable(e.to_string())
    }
}

/// Turn a lookup body into a validated coordinate.
fn interpret_response(body: &[u8]) -> Result<Coordinate, GeoFailure> {
    let lookup: LookupResponse = serde_json::from_slice(body)
        .map_err(|e| GeoFailure::PositionUnavailable(format!("unreadable response: {}", e)))?;

    if lookup.status != "success" {
        return Err(GeoFailure::PositionUnavailable(
            lookup
                .message
                .unwrap_or_else(|| format!("lookup status '{}'", lookup.status)),
        ));
    }

    match (lookup.lat, lookup.lon) {
        (Some(lat), Some(lon)) => Coordinate::new(lat, lon)
            .map_err(|e| GeoFailure::PositionUnavailable(e.to_string())),
        _ => Err(GeoFailure::PositionUnavailable(
            "response has no coordinates".to_string(),
        )),
    }
}
