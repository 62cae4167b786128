//! Best-effort duration probing.
//!
//! Each catalog track gets one independent background task that asks a
//! [`DurationProbe`] for the resource's duration and writes the answer into
//! the shared [`DurationCache`]. Probes are fire-and-forget: no retry, no
//! timeout beyond the HTTP client's own, no cancellation when the selection
//! changes. A track whose probe has not completed (or failed) keeps its
//! "00:00" placeholder.

use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use lofty::{AudioFile, Probe};
use reqwest::header::RANGE;
use reqwest::Client;
use snowfall_core::{DurationCache, Track};
use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Number of leading bytes requested from the audio resource.
///
/// Container headers carry the duration; there is no need to pull the whole
/// file. Servers that ignore the Range header still work, just slower.
const PROBE_RANGE_BYTES: u64 = 256 * 1024;

/// Source of track durations.
///
/// Seam for tests and for hosts whose audio primitive can report metadata
/// directly.
#[async_trait]
pub trait DurationProbe: Send + Sync {
    /// Measure the duration of a track's audio resource.
    async fn probe(&self, track: &Track) -> Result<Duration>;
}

/// Duration probe that fetches the head of the audio resource over HTTP and
/// reads the duration from container metadata.
pub struct HttpDurationProbe {
    http: Client,
}

impl HttpDurationProbe {
    /// Create a probe with its own HTTP client.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("SnowfallPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::Request)?;

        Ok(Self { http })
    }
}

#[async_trait]
impl DurationProbe for HttpDurationProbe {
    async fn probe(&self, track: &Track) -> Result<Duration> {
        let response = self
            .http
            .get(&track.url)
            .header(RANGE, format!("bytes=0-{}", PROBE_RANGE_BYTES - 1))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message: String::new(),
            });
        }

        let bytes = response.bytes().await?;

        let tagged_file = Probe::new(Cursor::new(bytes.to_vec()))
            .guess_file_type()
            .map_err(CatalogError::Io)?
            .read()
            .map_err(|e| CatalogError::Metadata(e.to_string()))?;

        Ok(tagged_file.properties().duration())
    }
}

/// Spawn one probe task per track.
///
/// Tasks complete in any order and each writes its result into `cache`
/// independently; failures are dropped after a debug log. The returned
/// handles are only needed by callers that want to await completion (tests
/// do; the player does not).
pub fn spawn_duration_probes<P>(
    probe: Arc<P>,
    tracks: Vec<Track>,
    cache: DurationCache,
) -> Vec<JoinHandle<()>>
where
    P: DurationProbe + 'static,
{
    tracks
        .into_iter()
        .map(|track| {
            let probe = Arc::clone(&probe);
            let cache = cache.clone();
            tokio::spawn(async move {
                match probe.probe(&track).await {
                    Ok(duration) => cache.insert(track.id.clone(), duration),
                    Err(e) => {
                        debug!(track = %track.name, error = %e, "Duration probe failed");
                    }
                }
            })
        })
        .collect()
}
