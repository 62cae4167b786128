//! Tests for the catalog provider.
//!
//! These use mock servers to verify client and service behavior without a
//! real CMS connection.

use snowfall_catalog::{
    spawn_duration_probes, CatalogClient, CatalogConfig, CatalogError, CatalogService,
    DurationProbe,
};
use snowfall_core::{DurationCache, Track};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CATALOG_BODY: &str = r##"{
    "data": [
        {
            "name": "Starlight",
            "artist": "Nova",
            "url": "https://cdn.example.com/starlight.mp3",
            "cover": "cover-1",
            "accent": "#112233",
            "top_track": true
        },
        {
            "name": "Viscous",
            "artist": "Nova",
            "url": "https://cdn.example.com/viscous.mp3",
            "cover": "cover-2",
            "accent": "#445566",
            "top_track": false
        },
        {
            "name": "Colors and Shapes",
            "artist": "Mac Miller",
            "url": "https://cdn.example.com/colors.mp3",
            "cover": "cover-3",
            "accent": "#778899",
            "top_track": true
        }
    ]
}"##;

async fn mock_catalog_server(template: ResponseTemplate, expected_hits: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/items/songs"))
        .respond_with(template)
        .expect(expected_hits)
        .mount(&server)
        .await;
    server
}

fn config_for(server: &MockServer) -> CatalogConfig {
    CatalogConfig::new(format!("{}/items/songs", server.uri()))
}

// =============================================================================
// Client Tests
// =============================================================================

mod client {
    use super::*;

    #[tokio::test]
    async fn fetch_preserves_response_order() {
        let template =
            ResponseTemplate::new(200).set_body_raw(CATALOG_BODY, "application/json");
        let server = mock_catalog_server(template, 1).await;

        let client = CatalogClient::new(config_for(&server)).expect("valid config");
        let tracks = client.fetch_tracks().await.expect("fetch succeeds");

        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[0].name, "Starlight");
        assert_eq!(tracks[1].name, "Viscous");
        assert_eq!(tracks[2].name, "Colors and Shapes");
        assert!(tracks[0].top_track);
        assert!(!tracks[1].top_track);
    }

    #[tokio::test]
    async fn fetch_assigns_distinct_ids() {
        let template =
            ResponseTemplate::new(200).set_body_raw(CATALOG_BODY, "application/json");
        let server = mock_catalog_server(template, 1).await;

        let client = CatalogClient::new(config_for(&server)).expect("valid config");
        let tracks = client.fetch_tracks().await.expect("fetch succeeds");

        assert_ne!(tracks[0].id, tracks[1].id);
        assert_ne!(tracks[1].id, tracks[2].id);
    }

    #[tokio::test]
    async fn server_error_is_reported_with_status() {
        let template = ResponseTemplate::new(500).set_body_string("boom");
        let server = mock_catalog_server(template, 1).await;

        let client = CatalogClient::new(config_for(&server)).expect("valid config");
        let result = client.fetch_tracks().await;

        match result {
            Err(CatalogError::ServerError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            _ => panic!("Expected ServerError"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let template =
            ResponseTemplate::new(200).set_body_raw("{\"data\": 42}", "application/json");
        let server = mock_catalog_server(template, 1).await;

        let client = CatalogClient::new(config_for(&server)).expect("valid config");
        let result = client.fetch_tracks().await;

        assert!(matches!(result, Err(CatalogError::ParseError(_))));
    }
}

// =============================================================================
// Service Tests
// =============================================================================

mod service {
    use super::*;

    #[tokio::test]
    async fn catalog_is_fetched_exactly_once() {
        let template =
            ResponseTemplate::new(200).set_body_raw(CATALOG_BODY, "application/json");
        // expect(1) makes the mock server fail the test on a second hit
        let server = mock_catalog_server(template, 1).await;

        let service =
            CatalogService::new(config_for(&server)).expect("valid config");

        let first_len = service.catalog().await.len();
        let second_len = service.catalog().await.len();

        assert_eq!(first_len, 3);
        assert_eq!(second_len, 3);
    }

    #[tokio::test]
    async fn loaded_catalog_selects_first_track() {
        let template =
            ResponseTemplate::new(200).set_body_raw(CATALOG_BODY, "application/json");
        let server = mock_catalog_server(template, 1).await;

        let service = CatalogService::new(config_for(&server)).expect("valid config");

        assert!(service.cached().is_none());

        let catalog = service.catalog().await;
        assert_eq!(catalog.selected().map(|t| t.name.as_str()), Some("Starlight"));
        assert!(service.cached().is_some());
    }

    #[tokio::test]
    async fn failed_fetch_pins_an_empty_catalog() {
        let template = ResponseTemplate::new(500).set_body_string("down");
        // Still exactly one hit: a failure must not trigger a retry
        let server = mock_catalog_server(template, 1).await;

        let service = CatalogService::new(config_for(&server)).expect("valid config");

        let catalog = service.catalog().await;
        assert!(catalog.is_empty());
        assert!(catalog.selected().is_none());

        // Second call stays empty without re-fetching
        assert!(service.catalog().await.is_empty());
    }
}

// =============================================================================
// Duration Probe Tests
// =============================================================================

mod probes {
    use super::*;
    use async_trait::async_trait;

    /// Probe that answers a fixed duration, failing for the track named "Broken".
    struct FakeProbe;

    #[async_trait]
    impl DurationProbe for FakeProbe {
        async fn probe(&self, track: &Track) -> snowfall_catalog::Result<Duration> {
            if track.name == "Broken" {
                return Err(CatalogError::Metadata("unreadable header".into()));
            }
            Ok(Duration::from_secs(65))
        }
    }

    fn tracks(names: &[&str]) -> Vec<Track> {
        names
            .iter()
            .map(|n| Track::new(*n, "Artist", format!("https://cdn.example.com/{n}.mp3")))
            .collect()
    }

    #[tokio::test]
    async fn completed_probes_populate_the_cache() {
        let cache = DurationCache::new();
        let tracks = tracks(&["A", "B"]);
        let ids: Vec<_> = tracks.iter().map(|t| t.id.clone()).collect();

        let handles = spawn_duration_probes(Arc::new(FakeProbe), tracks, cache.clone());
        for handle in handles {
            handle.await.expect("probe task panicked");
        }

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.label(&ids[0]), "01:05");
        assert_eq!(cache.label(&ids[1]), "01:05");
    }

    #[tokio::test]
    async fn failed_probe_leaves_the_placeholder() {
        let cache = DurationCache::new();
        let tracks = tracks(&["A", "Broken"]);
        let broken_id = tracks[1].id.clone();

        let handles = spawn_duration_probes(Arc::new(FakeProbe), tracks, cache.clone());
        for handle in handles {
            handle.await.expect("probe task panicked");
        }

        // The failure is dropped silently; only the good track is cached
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&broken_id), None);
        assert_eq!(cache.label(&broken_id), "00:00");
    }

    #[tokio::test]
    async fn cache_is_readable_while_probes_are_in_flight() {
        let cache = DurationCache::new();
        let tracks = tracks(&["A", "B", "C"]);
        let ids: Vec<_> = tracks.iter().map(|t| t.id.clone()).collect();

        let handles = spawn_duration_probes(Arc::new(FakeProbe), tracks, cache.clone());

        // Partial completion is always a valid state to read
        for id in &ids {
            let label = cache.label(id);
            assert!(label == "00:00" || label == "01:05");
        }

        for handle in handles {
            handle.await.expect("probe task panicked");
        }
        assert_eq!(cache.len(), 3);
    }
}
