//! Error types for page inference and the scan boundary

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while turning a scanned page into metadata.
///
/// Every variant is terminal for the page it occurred on. The scan session
/// logs it with the page index and moves on to the remaining pages.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The OCR engine returned no text observations for the page
    #[error("no text observations found on page")]
    NoObservations,

    /// The page image could not be decoded
    #[error("failed to decode page image {}: {reason}", .path.display())]
    ImageDecode { path: PathBuf, reason: String },

    /// Unexpected failure while analyzing the page
    #[error("page processing failed: {0}")]
    Processing(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a page file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A page file or metadata document is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScanError {
    /// Short machine-readable name of the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::NoObservations => "no_observations",
            ScanError::ImageDecode { .. } => "image_decode",
            ScanError::Processing(_) => "processing",
            ScanError::Config(_) => "config",
            ScanError::Io(_) => "io",
            ScanError::Json(_) => "json",
        }
    }

    /// Page image the error refers to, if any
    pub fn image_path(&self) -> Option<&Path> {
        match self {
            ScanError::ImageDecode { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result alias for scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_observations_is_distinct_from_decode_failure() {
        let empty = ScanError::NoObservations;
        let decode = ScanError::ImageDecode {
            path: PathBuf::from("scan/page1.png"),
            reason: "truncated PNG".to_string(),
        };

        assert_eq!(empty.kind(), "no_observations");
        assert_eq!(decode.kind(), "image_decode");
        assert!(decode.to_string().contains("truncated PNG"));
        assert_eq!(decode.image_path(), Some(Path::new("scan/page1.png")));
        assert_eq!(empty.image_path(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ScanError = io.into();
        assert_eq!(err.kind(), "io");
    }
}
