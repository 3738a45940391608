// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::borrow::Cow;

use html5gum::{DefaultEmitter, Token, Tokenizer};
use tokio::sync::mpsc;
use url::Url;

use crate::error::ExtractError;
use crate::http::HttpClient;

use super::classify::{StartTag, classify_link, is_summary_region, is_title_region};
use super::fragment::Fragment;

/// Which region of the page the scanner is currently inside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Idle,
    InTitle,
    InSummary,
}

impl ScanState {
    /// Advance on a start tag
    ///
    /// A title or summary tag switches into that region and is checked for
    /// nothing else. Any other tag returns to `Idle` and yields a link
    /// fragment if it is an episode link. End tags never change the state, so
    /// text between a closing tag and the next start tag still belongs to the
    /// region.
    pub fn on_start_tag(&mut self, tag: &StartTag<'_>) -> Option<Fragment> {
        if is_title_region(tag) {
            *self = ScanState::InTitle;
            return None;
        }
        if is_summary_region(tag) {
            *self = ScanState::InSummary;
            return None;
        }

        *self = ScanState::Idle;
        classify_link(tag).map(|href| Fragment::Link(href.to_string()))
    }

    /// Label a text token according to the current region. The text is kept verbatim.
    pub fn on_text(&self, text: &str) -> Option<Fragment> {
        match self {
            ScanState::Idle => None,
            ScanState::InTitle => Some(Fragment::Title(text.to_string())),
            ScanState::InSummary => Some(Fragment::Summary(text.to_string())),
        }
    }
}

/// Outcome of a successful page extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub url: String,
    /// HTTP status of the response (non-2xx bodies are scanned all the same)
    pub status: u16,
    /// Size of the response body in bytes
    pub bytes: usize,
    /// Number of fragments handed to the consumer
    pub fragments: usize,
}

/// Scan a document token by token, handing each fragment to `emit`
///
/// Start tags and character tokens drive the scan state; end tags, comments
/// and tokenizer errors are skipped, so malformed markup never reorders or
/// invents fragments. The scan stops early once `emit` returns `false`.
/// Returns the number of fragments accepted by `emit`.
pub fn scan_document<F>(html: &str, mut emit: F) -> usize
where
    F: FnMut(Fragment) -> bool,
{
    // Treat <script>, <style> and friends as raw text, like a browser would
    let mut emitter = DefaultEmitter::default();
    emitter.naively_switch_states(true);

    let mut state = ScanState::default();
    let mut emitted = 0;

    for token in Tokenizer::new_with_emitter(html, emitter).flatten() {
        let fragment = match token {
            Token::StartTag(tag) => {
                let name = String::from_utf8_lossy(&tag.name);
                let attrs: Vec<(Cow<'_, str>, Cow<'_, str>)> = tag
                    .attributes
                    .iter()
                    .map(|(key, value)| {
                        (String::from_utf8_lossy(key), String::from_utf8_lossy(value))
                    })
                    .collect();
                let start = StartTag::new(
                    &name,
                    attrs.iter().map(|(k, v)| (k.as_ref(), v.as_ref())).collect(),
                );
                state.on_start_tag(&start)
            }
            Token::String(text) => state.on_text(&String::from_utf8_lossy(&text)),
            _ => None,
        };

        if let Some(fragment) = fragment {
            tracing::trace!(kind = %fragment.kind(), value = fragment.value(), "fragment");
            if !emit(fragment) {
                tracing::debug!("Fragment consumer went away, stopping scan");
                break;
            }
            emitted += 1;
        }
    }

    emitted
}

/// Scan a document and collect every fragment in document order
pub fn scan_fragments(html: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    scan_document(html, |fragment| {
        fragments.push(fragment);
        true
    });
    fragments
}

/// Fetch an episode guide page and stream its fragments into `sender`
///
/// The sender is dropped when this returns, whether or not the fetch
/// succeeded, so a consumer reading until the channel closes always
/// terminates.
pub async fn extract_page<C: HttpClient>(
    client: &C,
    url: &str,
    sender: mpsc::Sender<Fragment>,
) -> Result<ExtractSummary, ExtractError> {
    Url::parse(url).map_err(|source| ExtractError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let response = client
        .get(url)
        .await
        .map_err(|source| ExtractError::FetchFailed {
            url: url.to_string(),
            source,
        })?;

    if !(200..300).contains(&response.status) {
        tracing::warn!("{} answered with HTTP {}, scanning body anyway", url, response.status);
    }

    let bytes = response.body.len();
    let body = String::from_utf8_lossy(&response.body).into_owned();

    // The scan is synchronous, so it runs on a blocking thread and hands
    // fragments over one at a time.
    let fragments = tokio::task::spawn_blocking(move || {
        scan_document(&body, |fragment| sender.blocking_send(fragment).is_ok())
    })
    .await
    .map_err(|e| ExtractError::ScanAborted {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    tracing::info!("Scanned {} ({} bytes): {} fragments", url, bytes, fragments);

    Ok(ExtractSummary {
        url: url.to_string(),
        status: response.status,
        bytes,
        fragments,
    })
}
