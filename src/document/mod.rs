//! Document Model
//!
//! Structured metadata inferred for one scanned page. Values are built once
//! by the analysis layer and never mutated afterwards.

pub mod json;

use serde::{Deserialize, Serialize};

pub use json::{from_json_str, to_json_string, to_json_string_pretty, to_json_value};

/// Kind of structured data detected in a span of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataKind {
    EmailAddress,
    PhoneNumber,
    Url,
    /// Reserved, not produced by the classifier
    Date,
    /// Reserved, not produced by the classifier
    Address,
    /// Reserved, not produced by the classifier
    Unknown,
}

/// A span of text classified as structured data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedDataItem {
    pub text: String,
    pub kind: DataKind,
}

impl DetectedDataItem {
    pub fn new(text: impl Into<String>, kind: DataKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A single table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellData {
    /// Cell text
    pub text: String,
    /// Zero-based row position, assigned by the table assembler
    pub row_index: usize,
    /// Zero-based position within the row
    pub column_index: usize,
    /// Structured data found in the cell text
    pub detected_data: Vec<DetectedDataItem>,
}

/// A detected table.
///
/// Rows are kept at their natural width, so `cells` may be ragged.
/// `column_count` is the width of the first row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableData {
    pub row_count: usize,
    pub column_count: usize,
    pub cells: Vec<Vec<CellData>>,
}

impl TableData {
    /// Build a table from its rows of cells
    pub fn from_rows(cells: Vec<Vec<CellData>>) -> Self {
        Self {
            row_count: cells.len(),
            column_count: cells.first().map(Vec::len).unwrap_or(0),
            cells,
        }
    }

    /// Whether rows differ in width
    pub fn is_ragged(&self) -> bool {
        self.cells.iter().any(|row| row.len() != self.column_count)
    }
}

/// One list line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemData {
    pub text: String,
    /// Nesting depth, always 0 (no nesting inference)
    pub level: u32,
}

/// All list lines found on a page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListData {
    pub items: Vec<ListItemData>,
}

/// Structured metadata for one page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DocumentMetadata {
    /// All recognized text in OCR order, one line per observation
    pub transcript: String,
    pub tables: Vec<TableData>,
    pub lists: Vec<ListData>,
    /// Page-level structured data, one entry per matching line
    pub detected_data: Vec<DetectedDataItem>,
    /// Primary recognition language
    pub language: Option<String>,
}
