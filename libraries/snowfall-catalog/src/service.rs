//! Once-per-process catalog loading.

use crate::client::CatalogClient;
use crate::error::Result;
use crate::types::CatalogConfig;
use snowfall_core::Catalog;
use tokio::sync::OnceCell;
use tracing::error;

/// Catalog provider with exactly-once fetch semantics.
///
/// The first call to [`CatalogService::catalog`] issues the network fetch;
/// every later call returns the same catalog without touching the network.
/// A failed fetch pins an empty catalog for the rest of the process - the
/// error is logged, not surfaced, and there is no retry.
pub struct CatalogService {
    client: CatalogClient,
    cell: OnceCell<Catalog>,
}

impl CatalogService {
    /// Create a service around a fresh client.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        Ok(Self {
            client: CatalogClient::new(config)?,
            cell: OnceCell::new(),
        })
    }

    /// Create a service around an existing client.
    pub fn with_client(client: CatalogClient) -> Self {
        Self {
            client,
            cell: OnceCell::new(),
        }
    }

    /// The underlying client (for asset base resolution).
    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// The catalog, fetched on first call.
    ///
    /// Selection defaults to the first track of the response; an empty or
    /// failed response leaves the catalog empty with no selection.
    pub async fn catalog(&self) -> &Catalog {
        self.cell
            .get_or_init(|| async {
                match self.client.fetch_tracks().await {
                    Ok(tracks) => Catalog::new(tracks),
                    Err(e) => {
                        error!(error = %e, "Catalog fetch failed, starting with empty catalog");
                        Catalog::default()
                    }
                }
            })
            .await
    }

    /// The catalog if it has already been loaded.
    pub fn cached(&self) -> Option<&Catalog> {
        self.cell.get()
    }
}
