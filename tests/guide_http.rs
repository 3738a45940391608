//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to serve episode guide pages and run the
//! pipeline end-to-end through the real reqwest client.

use std::time::Duration;

use epguide::{
    NoopReporter, PipelineOptions, ReqwestClient, TrailingPolicy, render_text, run_pipeline,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GUIDE_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Episode Guide</title></head><body>
<ul class="episodeGuide"><li><h3 class="episodeGuide-episodeTitle">Pilot</h3><p class="episodeGuide-episodeSummary">The first one.</p><a class="episodeGuide-episodeLink" href="/ep/1">Watch</a></li><li><h3 class="episodeGuide-episodeTitle">Second</h3><p class="episodeGuide-episodeSummary">The next one.</p><a class="episodeGuide-episodeLink" href="/ep/2">Watch</a></li><li><h3 class="episodeGuide-episodeTitle">Finale</h3><p class="episodeGuide-episodeSummary">The last one.</p><a class="episodeGuide-episodeLink" href="/ep/3">Watch</a></li></ul>
</body></html>"#;

async fn serve(status: u16, body: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/episode-guide/"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(&mock_server)
        .await;

    mock_server
}

fn options(seed: String, trailing: TrailingPolicy) -> PipelineOptions {
    PipelineOptions {
        seeds: vec![seed],
        trailing,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_guide_page_drops_trailing_episode() {
    let mock_server = serve(200, GUIDE_PAGE).await;
    let seed = format!("{}/episode-guide/", mock_server.uri());

    let result = run_pipeline(
        &ReqwestClient::new(),
        &options(seed, TrailingPolicy::Drop),
        NoopReporter::shared(),
    )
    .await;

    assert!(result.failed_pages.is_empty());
    assert_eq!(result.scanned_pages.len(), 1);
    assert_eq!(result.scanned_pages[0].fragments, 9);
    assert_eq!(
        render_text(&result.episodes),
        "Found 2 episodes:\n\
         Title: Pilot | Summary: The first one. | Link: /ep/1\n\
         Title: Second | Summary: The next one. | Link: /ep/2\n"
    );
}

#[tokio::test]
async fn test_guide_page_with_trailing_flush() {
    let mock_server = serve(200, GUIDE_PAGE).await;
    let seed = format!("{}/episode-guide/", mock_server.uri());

    let result = run_pipeline(
        &ReqwestClient::new(),
        &options(seed, TrailingPolicy::Flush),
        NoopReporter::shared(),
    )
    .await;

    assert_eq!(result.episodes.len(), 3);
    assert_eq!(result.episodes[2].title, "Finale");
    assert_eq!(result.episodes[2].link, "/ep/3");
}

#[tokio::test]
async fn test_error_status_body_is_still_scanned() {
    let mock_server = serve(503, GUIDE_PAGE).await;
    let seed = format!("{}/episode-guide/", mock_server.uri());

    let result = run_pipeline(
        &ReqwestClient::new(),
        &options(seed, TrailingPolicy::Drop),
        NoopReporter::shared(),
    )
    .await;

    assert_eq!(result.scanned_pages[0].status, 503);
    assert_eq!(result.episodes.len(), 2);
}

#[tokio::test]
async fn test_redesigned_page_yields_nothing() {
    let mock_server = serve(200, "<html><body><h3>Pilot</h3><p>Text</p></body></html>").await;
    let seed = format!("{}/episode-guide/", mock_server.uri());

    let result = run_pipeline(
        &ReqwestClient::new(),
        &options(seed, TrailingPolicy::Flush),
        NoopReporter::shared(),
    )
    .await;

    assert!(result.episodes.is_empty());
    assert!(result.failed_pages.is_empty());
    assert_eq!(result.scanned_pages[0].fragments, 0);
}

#[tokio::test]
async fn test_unreachable_server_finishes_with_zero_episodes() {
    // Bind to learn a free port, then release it so connections are refused
    let seed = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}/episode-guide/", listener.local_addr().unwrap())
    };

    let client = ReqwestClient::with_timeout(Duration::from_secs(5)).unwrap();
    let result = run_pipeline(
        &client,
        &options(seed.clone(), TrailingPolicy::Drop),
        NoopReporter::shared(),
    )
    .await;

    assert!(result.episodes.is_empty());
    assert!(result.scanned_pages.is_empty());
    assert_eq!(result.failed_pages.len(), 1);
    assert_eq!(result.failed_pages[0].0, seed);
    assert_eq!(render_text(&result.episodes), "Found 0 episodes:\n");
}
