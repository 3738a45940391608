pub mod episode;
pub mod error;
pub mod guide;
pub mod http;
pub mod pipeline;
pub mod progress;
pub mod report;

// Re-export main types for convenience
pub use episode::{Aggregator, Episode, TrailingPolicy, aggregate};
pub use error::{ExtractError, ReportError};
pub use guide::{
    ExtractSummary, Fragment, FragmentKind, ScanState, StartTag, classify_link, extract_page,
    is_summary_region, is_title_region, scan_document, scan_fragments,
};
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use pipeline::{DEFAULT_SEED, PipelineOptions, PipelineResult, run_pipeline};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use report::{format_episode, render_json, render_text};
