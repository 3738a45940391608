// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Errors that can occur while fetching and scanning an episode guide page
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to fetch page from {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid page URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Scan of {url} did not complete: {reason}")]
    ScanAborted { url: String, reason: String },
}

/// Errors that can occur while rendering the episode report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize episodes: {0}")]
    Json(#[from] serde_json::Error),
}
