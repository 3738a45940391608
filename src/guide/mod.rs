mod classify;
mod extract;
mod fragment;

pub use classify::{
    LINK_MARKER, StartTag, SUMMARY_MARKER, TITLE_MARKER, classify_link, is_summary_region,
    is_title_region,
};
pub use extract::{ExtractSummary, ScanState, extract_page, scan_document, scan_fragments};
pub use fragment::{Fragment, FragmentKind};
