// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use futures::future::join_all;
use tokio::sync::mpsc;

use crate::episode::{Aggregator, Episode, TrailingPolicy};
use crate::guide::{ExtractSummary, extract_page};
use crate::http::HttpClient;
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// The episode guide scraped when no seed is given
pub const DEFAULT_SEED: &str =
    "https://www.channel4.com/programmes/location-location-location/episode-guide/";

/// Options for an extraction run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Pages to extract from. Every page feeds the same aggregator.
    pub seeds: Vec<String>,
    /// What happens to the fields left over at the end of the stream
    pub trailing: TrailingPolicy,
    /// Fragments buffered between extractors and the aggregator
    pub channel_capacity: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            seeds: vec![DEFAULT_SEED.to_string()],
            trailing: TrailingPolicy::Drop,
            channel_capacity: 1,
        }
    }
}

/// Result of an extraction run
#[derive(Debug, Clone)]
pub struct PipelineResult {
    /// Assembled episodes in the order they were completed
    pub episodes: Vec<Episode>,
    /// Pages that were fetched and scanned
    pub scanned_pages: Vec<ExtractSummary>,
    /// Pages that failed (url, error message)
    pub failed_pages: Vec<(String, String)>,
}

/// Extract episodes from every seed page
///
/// One extractor task is spawned per seed. All of them share a single
/// fragment channel, which the aggregator drains until every extractor has
/// dropped its sender. Fetch failures are logged and recorded in the result;
/// they never abort the run.
pub async fn run_pipeline<C: HttpClient + Clone + 'static>(
    client: &C,
    options: &PipelineOptions,
    reporter: SharedProgressReporter,
) -> PipelineResult {
    let (tx, mut rx) = mpsc::channel(options.channel_capacity.max(1));

    let mut handles = Vec::with_capacity(options.seeds.len());
    for url in &options.seeds {
        reporter.report(ProgressEvent::FetchingPage { url: url.clone() });

        let client = client.clone();
        let url = url.clone();
        let tx = tx.clone();
        let reporter = reporter.clone();

        handles.push(tokio::spawn(async move {
            let result = extract_page(&client, &url, tx).await;

            match &result {
                Ok(summary) => reporter.report(ProgressEvent::PageScanned {
                    url: url.clone(),
                    status: summary.status,
                    bytes: summary.bytes,
                    fragments: summary.fragments,
                }),
                Err(e) => {
                    tracing::error!("Failed to extract episodes from {}: {}", url, e);
                    reporter.report(ProgressEvent::PageFailed {
                        url: url.clone(),
                        error: e.to_string(),
                    });
                }
            }

            result
        }));
    }
    // Only the extractors hold senders now, so the channel closes when the last one finishes
    drop(tx);

    let mut aggregator = Aggregator::new(options.trailing);
    while let Some(fragment) = rx.recv().await {
        tracing::debug!("Received {} fragment", fragment.kind());
        let before = aggregator.len();
        aggregator.push(fragment);
        if aggregator.len() > before {
            reporter.report(ProgressEvent::EpisodeAssembled {
                count: aggregator.len(),
            });
        }
    }

    let mut scanned_pages = Vec::new();
    let mut failed_pages = Vec::new();

    for (url, joined) in options.seeds.iter().zip(join_all(handles).await) {
        match joined {
            Ok(Ok(summary)) => scanned_pages.push(summary),
            Ok(Err(e)) => failed_pages.push((url.clone(), e.to_string())),
            Err(e) => {
                tracing::error!("Extractor task for {} did not finish: {}", url, e);
                failed_pages.push((url.clone(), e.to_string()));
            }
        }
    }

    let episodes = aggregator.finish();

    reporter.report(ProgressEvent::ExtractionCompleted {
        episode_count: episodes.len(),
        scanned_pages: scanned_pages.len(),
        failed_pages: failed_pages.len(),
    });

    PipelineResult {
        episodes,
        scanned_pages,
        failed_pages,
    }
}
