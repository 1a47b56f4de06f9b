//! OverpassClient implementation of FacilityQueryClient.

use locator_core::{
    async_trait, ConfigError, Coordinate, Facility, FacilityQueryClient, QueryFailure,
};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::parse_facilities;
use crate::config::OverpassConfig;
use crate::query::build_query;

/// Maximum number of body bytes kept in a `BadStatus` failure.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Hospital lookup against an Overpass API interpreter.
///
/// Sends the QL query as the `data` parameter of a GET request and parses
/// the JSON result. Transient failures (network, 429, 5xx) are retried at
/// most once after a fixed backoff when enabled in the config.
pub struct OverpassClient {
    client: Client,
    config: OverpassConfig,
}

impl OverpassClient {
    /// Create a new OverpassClient with the given configuration.
    pub fn new(config: OverpassConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        info!(
            "OverpassClient initialized with endpoint: {}, include_areas: {}",
            config.api_url, config.include_areas
        );

        Ok(Self { client, config })
    }

    /// Create an OverpassClient from environment variables.
    ///
    /// See [`OverpassConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(OverpassConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OverpassConfig {
        &self.config
    }

    /// Send one request and parse the result.
    async fn fetch_once(&self, ql: &str) -> Result<Vec<Facility>, QueryFailure> {
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[("data", ql)])
            .send()
            .await
            .map_err(|e| QueryFailure::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryFailure::BadStatus {
                status: status.as_u16(),
                body: truncate(body.trim()),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| QueryFailure::Network(e.to_string()))?;

        parse_facilities(&bytes)
    }
}

#[async_trait]
impl FacilityQueryClient for OverpassClient {
    async fn query(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Facility>, QueryFailure> {
        let ql = build_query(
            center,
            radius_meters,
            self.config.server_timeout_secs,
            self.config.include_areas,
        );

        debug!("Sending Overpass query: {}", ql);

        let result = match self.fetch_once(&ql).await {
            Err(e) if e.is_transient() && self.config.retry_on_transient => {
                warn!(
                    "Overpass query failed ({}), retrying in {:?}",
                    e, self.config.retry_backoff
                );
                tokio::time::sleep(self.config.retry_backoff).await;
                self.fetch_once(&ql).await
            }
            other => other,
        };

        if let Ok(ref facilities) = result {
            debug!(
                center = %center,
                radius_meters,
                count = facilities.len(),
                "Overpass query completed"
            );
        }

        result
    }

    fn name(&self) -> &str {
        "OverpassClient"
    }
}

fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let mut cut: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = OverpassClient::new(OverpassConfig::default()).unwrap();
        assert_eq!(client.name(), "OverpassClient");
        assert_eq!(client.config().api_url, crate::config::DEFAULT_OVERPASS_URL);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = OverpassConfig::builder().timeout(Duration::ZERO).build();
        assert!(OverpassClient::new(config).is_err());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short"), "short");

        let long = "x".repeat(MAX_ERROR_BODY_CHARS + 10);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_ERROR_BODY_CHARS + 1);
        assert!(cut.ends_with('…'));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        // Port 9 (discard) on localhost is not expected to speak HTTP.
        let config = OverpassConfig::builder()
            .api_url("http://127.0.0.1:9/api/interpreter")
            .timeout(Duration::from_secs(2))
            .retry_backoff(Duration::from_millis(10))
            .build();
        let client = OverpassClient::new(config).unwrap();
        let center = Coordinate::new(12.9716, 77.5946).unwrap();

        let result = client.query(center, 5000.0).await;
        assert!(matches!(result, Err(QueryFailure::Network(_))));
    }

    // Integration tests that require network access
    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_live_query_bangalore() {
        let client = OverpassClient::new(OverpassConfig::default()).unwrap();
        let center = Coordinate::new(12.9716, 77.5946).unwrap();

        let facilities = client.query(center, 5000.0).await.unwrap();
        assert!(!facilities.is_empty());
        assert!(facilities.iter().all(|f| !f.name.is_empty()));
    }
}
