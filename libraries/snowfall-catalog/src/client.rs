//! HTTP client for the content API.

use crate::error::{CatalogError, Result};
use crate::types::{CatalogConfig, CatalogResponse};
use reqwest::Client;
use snowfall_core::Track;
use std::time::Duration;
use tracing::{debug, info};

/// Client for fetching the track catalog from the content API.
///
/// The fetch is a single unauthenticated GET; there is no pagination and no
/// retry. Callers that need once-per-process semantics should go through
/// [`crate::CatalogService`].
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        // Validate URL
        if config.endpoint.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let normalized_config = CatalogConfig {
            endpoint,
            asset_base: config.asset_base.trim_end_matches('/').to_string(),
        };

        // HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("SnowfallPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self {
            http,
            config: normalized_config,
        })
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The configured asset base URL.
    pub fn asset_base(&self) -> &str {
        &self.config.asset_base
    }

    /// Fetch the full track collection.
    ///
    /// Returns the tracks in response order, each assigned a fresh stable id.
    pub async fn fetch_tracks(&self) -> Result<Vec<Track>> {
        debug!(url = %self.config.endpoint, "Fetching track catalog");

        let response = self
            .http
            .get(&self.config.endpoint)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    CatalogError::ServerUnreachable(e.to_string())
                } else {
                    CatalogError::Request(e)
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let body: CatalogResponse = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse catalog response: {}", e))
        })?;

        let tracks: Vec<Track> = body
            .data
            .into_iter()
            .map(crate::types::WireTrack::into_track)
            .collect();

        info!(count = tracks.len(), "Fetched track catalog");

        Ok(tracks)
    }
}
