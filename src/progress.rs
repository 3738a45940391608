use std::sync::Arc;

/// Events emitted during extraction for progress reporting
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// A page is being fetched
    FetchingPage { url: String },

    /// A page was fetched and its scan finished
    PageScanned {
        url: String,
        /// HTTP status of the response
        status: u16,
        /// Size of the response body in bytes
        bytes: usize,
        /// Fragments handed to the aggregator
        fragments: usize,
    },

    /// A page could not be fetched or scanned
    PageFailed { url: String, error: String },

    /// An episode boundary was found
    EpisodeAssembled {
        /// Episodes assembled so far, this one included
        count: usize,
    },

    /// All pages are done and the episodes are assembled
    ExtractionCompleted {
        episode_count: usize,
        scanned_pages: usize,
        failed_pages: usize,
    },
}

/// Trait for reporting progress events during extraction.
///
/// Implementations can use this to display spinners, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}
