//! Analysis Layer
//!
//! Infers document structure from the text observations of one page:
//! rows and tables from geometry, lists and structured data from the text.
//! Everything here is a pure function of the observations, so a single
//! set of options can be shared across all pages of a scan.

pub mod detected_data;
pub mod lists;
pub mod metadata;
pub mod rows;
pub mod tables;

pub use detected_data::{classify, DataMatcher, MatchMode};
pub use lists::{detect_list, is_list_item};
pub use metadata::{analyze_page, build_transcript, primary_language, FALLBACK_LANGUAGE};
pub use rows::{cluster_rows, Row, ROW_TOLERANCE};
pub use tables::{assemble_tables, is_table, MIN_TABLE_OBSERVATIONS};

/// Which analysis passes to run and which languages were requested
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Build tables from row clusters
    pub detect_tables: bool,
    /// Collect list lines
    pub detect_lists: bool,
    /// Classify emails, phone numbers and URLs (page lines and table cells)
    pub detect_data: bool,
    /// Requested recognition languages, primary first
    pub languages: Vec<String>,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            detect_tables: true,
            detect_lists: true,
            detect_data: true,
            languages: Vec::new(),
        }
    }
}
