//! JSON export of page metadata
//!
//! The key names and nesting below are the wire contract shared with callers
//! on the other side of the process boundary. Empty sequences are always
//! written out as `[]`. A missing language is written as `""` and read back
//! as `None`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    CellData, DataKind, DetectedDataItem, DocumentMetadata, ListData, ListItemData, TableData,
};
use crate::error::Result;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument {
    transcript: String,
    language: String,
    tables: Vec<JsonTable>,
    lists: Vec<JsonList>,
    detected_data: Vec<JsonDetectedData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonTable {
    row_count: usize,
    column_count: usize,
    cells: Vec<Vec<JsonCell>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonCell {
    text: String,
    row: usize,
    column: usize,
    detected_data: Vec<JsonDetectedData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonList {
    items: Vec<JsonListItem>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonListItem {
    text: String,
    level: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonDetectedData {
    text: String,
    #[serde(rename = "type")]
    kind: DataKind,
}

impl From<&DetectedDataItem> for JsonDetectedData {
    fn from(item: &DetectedDataItem) -> Self {
        Self {
            text: item.text.clone(),
            kind: item.kind,
        }
    }
}

impl From<JsonDetectedData> for DetectedDataItem {
    fn from(item: JsonDetectedData) -> Self {
        DetectedDataItem::new(item.text, item.kind)
    }
}

impl From<&CellData> for JsonCell {
    fn from(cell: &CellData) -> Self {
        Self {
            text: cell.text.clone(),
            row: cell.row_index,
            column: cell.column_index,
            detected_data: cell.detected_data.iter().map(Into::into).collect(),
        }
    }
}

impl From<JsonCell> for CellData {
    fn from(cell: JsonCell) -> Self {
        CellData {
            text: cell.text,
            row_index: cell.row,
            column_index: cell.column,
            detected_data: cell.detected_data.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&TableData> for JsonTable {
    fn from(table: &TableData) -> Self {
        Self {
            row_count: table.row_count,
            column_count: table.column_count,
            cells: table
                .cells
                .iter()
                .map(|row| row.iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl From<JsonTable> for TableData {
    fn from(table: JsonTable) -> Self {
        // Counts are taken from the document as written, not recomputed
        TableData {
            row_count: table.row_count,
            column_count: table.column_count,
            cells: table
                .cells
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

impl From<&ListData> for JsonList {
    fn from(list: &ListData) -> Self {
        Self {
            items: list
                .items
                .iter()
                .map(|item| JsonListItem {
                    text: item.text.clone(),
                    level: item.level,
                })
                .collect(),
        }
    }
}

impl From<JsonList> for ListData {
    fn from(list: JsonList) -> Self {
        ListData {
            items: list
                .items
                .into_iter()
                .map(|item| ListItemData {
                    text: item.text,
                    level: item.level,
                })
                .collect(),
        }
    }
}

impl From<&DocumentMetadata> for JsonDocument {
    fn from(metadata: &DocumentMetadata) -> Self {
        Self {
            transcript: metadata.transcript.clone(),
            language: metadata.language.clone().unwrap_or_default(),
            tables: metadata.tables.iter().map(Into::into).collect(),
            lists: metadata.lists.iter().map(Into::into).collect(),
            detected_data: metadata.detected_data.iter().map(Into::into).collect(),
        }
    }
}

impl From<JsonDocument> for DocumentMetadata {
    fn from(doc: JsonDocument) -> Self {
        DocumentMetadata {
            transcript: doc.transcript,
            tables: doc.tables.into_iter().map(Into::into).collect(),
            lists: doc.lists.into_iter().map(Into::into).collect(),
            detected_data: doc.detected_data.into_iter().map(Into::into).collect(),
            language: Some(doc.language).filter(|l| !l.is_empty()),
        }
    }
}

impl Serialize for DocumentMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        JsonDocument::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DocumentMetadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        JsonDocument::deserialize(deserializer).map(Into::into)
    }
}

/// Convert metadata into a JSON value
pub fn to_json_value(metadata: &DocumentMetadata) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(metadata)?)
}

/// Compact JSON rendering
pub fn to_json_string(metadata: &DocumentMetadata) -> Result<String> {
    Ok(serde_json::to_string(metadata)?)
}

/// Pretty-printed JSON rendering
pub fn to_json_string_pretty(metadata: &DocumentMetadata) -> Result<String> {
    Ok(serde_json::to_string_pretty(metadata)?)
}

/// Parse a metadata document produced by [`to_json_string`]
pub fn from_json_str(json: &str) -> Result<DocumentMetadata> {
    Ok(serde_json::from_str(json)?)
}
