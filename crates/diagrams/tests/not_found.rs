use deck_core::HttpFetcher;
use deck_diagrams::{download_catalog, scrape_pages, CatalogEntry, ScrapeOptions};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_is_skipped_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/images/hub-spoke.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(b"\x89PNG".to_vec()),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/images/gone.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let entries = [
        CatalogEntry {
            url: leak(format!("{}/images/gone.png", server.uri())),
            filename: "gone.png",
        },
        CatalogEntry {
            url: leak(format!("{}/images/hub-spoke.png", server.uri())),
            filename: "hub-spoke-architecture.png",
        },
    ];
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("images");

    let out_dir = out.clone();
    let summary = tokio::task::spawn_blocking(move || {
        let fetcher = HttpFetcher::new().unwrap();
        download_catalog(&fetcher, &entries, &out_dir).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.failed, 1);
    assert!(out.join("hub-spoke-architecture.png").exists());
    assert!(!out.join("gone.png").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_scraper_survives_missing_page() {
    let server = MockServer::start().await;
    let html = r#"<img src="diagrams/flow-architecture.svg"><img src="logo.png">"#;
    Mock::given(method("GET"))
        .and(path("/docs/event-driven/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/docs/event-driven/diagrams/flow-architecture.svg"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<svg/>", "image/svg+xml"))
        .mount(&server)
        .await;

    let pages = vec![
        format!("{}/docs/missing/", server.uri()),
        format!("{}/docs/event-driven/", server.uri()),
    ];
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().to_path_buf();

    let summary = tokio::task::spawn_blocking(move || {
        let fetcher = HttpFetcher::new().unwrap();
        let pages: Vec<&str> = pages.iter().map(String::as_str).collect();
        let options = ScrapeOptions {
            delay: Duration::ZERO,
        };
        scrape_pages(&fetcher, &pages, &out, &options).unwrap()
    })
    .await
    .unwrap();

    assert_eq!(summary.succeeded(), 1);
    assert!(dir.path().join("event_driven.svg").exists());
    assert!(!dir.path().join("event_driven_1.png").exists());
}
