//! scan-metadata - document structure inference for scanned pages
//!
//! Turns the text observations an OCR engine produced for a page into a
//! transcript, tables, lists and detected data, and exports the result as
//! JSON. Multi-page scans are processed concurrently, one task per page.

pub mod analysis;
pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod storage;
pub mod vision;

pub use analysis::{analyze_page, AnalysisOptions};
pub use app::{PageResult, ScanResponse, ScanSession};
pub use config::AppConfig;
pub use document::{
    CellData, DataKind, DetectedDataItem, DocumentMetadata, ListData, ListItemData, TableData,
};
pub use error::{Result, ScanError};
pub use vision::{BoundingBox, Candidate, ObservationSource, TextObservation};
