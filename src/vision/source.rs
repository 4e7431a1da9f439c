//! Observation sources
//!
//! The OCR engine itself lives outside this crate. A source hands back the
//! recognized text lines for one page together with the page image it was
//! recognized from.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::observation::TextObservation;
use crate::error::{Result, ScanError};

/// Output of the OCR engine for a single page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedPage {
    /// Page image the observations were recognized from
    #[serde(default)]
    pub image_path: Option<PathBuf>,
    /// Recognized text lines in the order the engine returned them
    #[serde(default)]
    pub observations: Vec<TextObservation>,
}

/// Supplier of text observations for scanned pages
pub trait ObservationSource: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    /// Recognize the page stored at `page`
    fn recognize(&self, page: &Path) -> Result<RecognizedPage>;
}

/// Reads pages that were already recognized and saved as JSON page files
#[derive(Debug, Clone)]
pub struct PageFileSource {
    /// Check that the referenced page image decodes
    verify_images: bool,
}

impl PageFileSource {
    pub fn new() -> Self {
        Self {
            verify_images: true,
        }
    }

    /// Skip decoding the referenced page images
    pub fn without_image_check(mut self) -> Self {
        self.verify_images = false;
        self
    }
}

impl Default for PageFileSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservationSource for PageFileSource {
    fn name(&self) -> &str {
        "page-file"
    }

    fn recognize(&self, page: &Path) -> Result<RecognizedPage> {
        let content = std::fs::read_to_string(page)?;
        let mut recognized: RecognizedPage = serde_json::from_str(&content)?;

        // Image paths are relative to the page file
        if let Some(image) = recognized.image_path.take() {
            let resolved = match page.parent() {
                Some(dir) if image.is_relative() => dir.join(image),
                _ => image,
            };
            if self.verify_images {
                check_image(&resolved)?;
            }
            recognized.image_path = Some(resolved);
        }

        debug!(
            "Loaded {} observations from {:?}",
            recognized.observations.len(),
            page
        );

        Ok(recognized)
    }
}

/// Make sure the page image can be decoded
fn check_image(path: &Path) -> Result<(u32, u32)> {
    let dimensions = image::image_dimensions(path).map_err(|e| ScanError::ImageDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!("Page image {:?} is {}x{}", path, dimensions.0, dimensions.1);
    Ok(dimensions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PAGE_JSON: &str = r#"{
        "observations": [
            {"candidates": [{"text": "Hello", "confidence": 0.9}],
             "boundingBox": {"x": 0.1, "y": 0.9, "width": 0.2, "height": 0.03}}
        ]
    }"#;

    #[test]
    fn test_load_page_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", PAGE_JSON).unwrap();

        let page = PageFileSource::new().recognize(file.path()).unwrap();
        assert_eq!(page.observations.len(), 1);
        assert_eq!(page.observations[0].top_text(), "Hello");
        assert!(page.image_path.is_none());
    }

    #[test]
    fn test_missing_page_file() {
        let result = PageFileSource::new().recognize(Path::new("/nonexistent/page.json"));
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[test]
    fn test_invalid_page_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json {{").unwrap();

        let result = PageFileSource::new().recognize(file.path());
        assert!(matches!(result, Err(ScanError::Json(_))));
    }

    #[test]
    fn test_undecodable_image_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("page1.png"), b"definitely not a png").unwrap();
        let page_path = dir.path().join("page1.json");
        std::fs::write(
            &page_path,
            r#"{"imagePath": "page1.png", "observations": []}"#,
        )
        .unwrap();

        let result = PageFileSource::new().recognize(&page_path);
        let err = result.unwrap_err();
        assert_eq!(err.image_path(), Some(dir.path().join("page1.png").as_path()));

        let page = PageFileSource::new()
            .without_image_check()
            .recognize(&page_path)
            .unwrap();
        assert_eq!(page.image_path, Some(dir.path().join("page1.png")));
    }
}
