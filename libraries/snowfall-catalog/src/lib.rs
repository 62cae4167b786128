//! Snowfall Player Catalog Provider
//!
//! HTTP client library for fetching the track catalog from the content API
//! and probing track durations in the background.
//!
//! # Features
//!
//! - **Catalog fetch**: one unauthenticated GET to the CMS songs endpoint
//! - **One-shot service**: the catalog is fetched at most once per process
//! - **Duration probing**: best-effort, fire-and-forget per-track tasks
//!   writing into a shared [`snowfall_core::DurationCache`]
//!
//! # Example
//!
//! ```ignore
//! use snowfall_catalog::{CatalogConfig, CatalogService, HttpDurationProbe, spawn_duration_probes};
//! use snowfall_core::DurationCache;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = CatalogService::new(CatalogConfig::default())?;
//!
//!     // Fetches on first call, cached afterwards
//!     let catalog = service.catalog().await;
//!     println!("Found {} tracks", catalog.len());
//!
//!     // Kick off background duration probes
//!     let probe = Arc::new(HttpDurationProbe::new()?);
//!     let cache = DurationCache::new();
//!     spawn_duration_probes(probe, catalog.tracks().to_vec(), cache.clone());
//!
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

mod client;
mod error;
mod probe;
mod service;
mod types;

// Re-export main types
pub use client::CatalogClient;
pub use error::{CatalogError, Result};
pub use probe::{spawn_duration_probes, DurationProbe, HttpDurationProbe};
pub use service::CatalogService;
pub use types::{CatalogConfig, CatalogResponse, WireTrack};
