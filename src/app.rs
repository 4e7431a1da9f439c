//! Scan Session
//!
//! Runs page analysis for a multi-page scan. Every page is an independent
//! unit of work on the blocking pool; the response is assembled only after
//! every submitted page has finished or been marked as failed. A failure on
//! one page never affects the others.

use futures_util::future::join_all;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::analysis::{self, AnalysisOptions};
use crate::config::AppConfig;
use crate::document::DocumentMetadata;
use crate::error::{Result, ScanError};
use crate::vision::{ObservationSource, PageFileSource, RecognizedPage};

/// Outcome for one page of a scan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    /// Zero-based page position in the scan
    pub page_index: usize,
    /// Page image, kept even when analysis failed
    pub image_path: Option<PathBuf>,
    /// Inferred metadata, `None` when the page failed
    pub metadata: Option<DocumentMetadata>,
    /// Failure reason for the page
    #[serde(skip)]
    pub error: Option<String>,
}

impl PageResult {
    fn succeeded(page_index: usize, image_path: Option<PathBuf>, metadata: DocumentMetadata) -> Self {
        Self {
            page_index,
            image_path,
            metadata: Some(metadata),
            error: None,
        }
    }

    fn failed(page_index: usize, image_path: Option<PathBuf>, err: &ScanError) -> Self {
        match err {
            ScanError::NoObservations => {
                warn!(page = page_index, kind = err.kind(), "Page {}: {}", page_index, err)
            }
            _ => error!(page = page_index, kind = err.kind(), "Page {} failed: {}", page_index, err),
        }
        Self {
            page_index,
            image_path,
            metadata: None,
            error: Some(err.to_string()),
        }
    }

    /// Whether metadata was produced for the page
    pub fn is_success(&self) -> bool {
        self.metadata.is_some()
    }
}

/// Response for a whole scan, pages in submission order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    pub scan_id: String,
    pub pages: Vec<PageResult>,
}

impl ScanResponse {
    /// Number of pages that produced metadata
    pub fn success_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_success()).count()
    }

    /// Render the response as JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// One scan, reused for all of its pages
pub struct ScanSession {
    source: Arc<dyn ObservationSource>,
    options: Arc<AnalysisOptions>,
    scan_id: Uuid,
}

impl ScanSession {
    /// Create a session over an observation source
    pub fn new(source: Arc<dyn ObservationSource>, options: AnalysisOptions) -> Self {
        Self {
            source,
            options: Arc::new(options),
            scan_id: Uuid::new_v4(),
        }
    }

    /// Create a session reading page files, configured from `config`
    pub fn from_config(config: &AppConfig) -> Self {
        let mut source = PageFileSource::new();
        if !config.recognition.verify_images {
            source = source.without_image_check();
        }
        Self::new(Arc::new(source), AnalysisOptions::from(&config.recognition))
    }

    /// Scan identifier
    pub fn scan_id(&self) -> Uuid {
        self.scan_id
    }

    /// Analysis options shared by all pages
    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Recognize and analyze every page, concurrently
    pub async fn process_pages(&self, pages: Vec<PathBuf>) -> ScanResponse {
        info!(
            "Scan {}: processing {} pages with source '{}'",
            self.scan_id,
            pages.len(),
            self.source.name()
        );
        let start = Instant::now();

        let handles: Vec<_> = pages
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                let source = Arc::clone(&self.source);
                let options = Arc::clone(&self.options);
                tokio::spawn(async move {
                    let recognized =
                        tokio::task::spawn_blocking(move || source.recognize(&path)).await;
                    match recognized {
                        Ok(Ok(page)) => analyze_recognized(index, page, options).await,
                        Ok(Err(e)) => {
                            PageResult::failed(index, e.image_path().map(PathBuf::from), &e)
                        }
                        Err(e) => PageResult::failed(
                            index,
                            None,
                            &ScanError::Processing(format!("recognition task failed: {}", e)),
                        ),
                    }
                })
            })
            .collect();

        let response = self.collect(join_all(handles).await);
        info!(
            "Scan {}: {}/{} pages analyzed in {:?}",
            self.scan_id,
            response.success_count(),
            response.pages.len(),
            start.elapsed()
        );
        response
    }

    /// Analyze pages whose observations are already available
    pub async fn process_recognized(&self, pages: Vec<RecognizedPage>) -> ScanResponse {
        let handles: Vec<_> = pages
            .into_iter()
            .enumerate()
            .map(|(index, page)| {
                let options = Arc::clone(&self.options);
                tokio::spawn(analyze_recognized(index, page, options))
            })
            .collect();

        self.collect(join_all(handles).await)
    }

    fn collect(
        &self,
        outcomes: Vec<std::result::Result<PageResult, tokio::task::JoinError>>,
    ) -> ScanResponse {
        let pages = outcomes
            .into_iter()
            .enumerate()
            .map(|(index, outcome)| {
                outcome.unwrap_or_else(|e| {
                    PageResult::failed(
                        index,
                        None,
                        &ScanError::Processing(format!("page task failed: {}", e)),
                    )
                })
            })
            .collect();

        ScanResponse {
            scan_id: self.scan_id.to_string(),
            pages,
        }
    }
}

/// Run the analysis of one recognized page on the blocking pool
async fn analyze_recognized(
    index: usize,
    page: RecognizedPage,
    options: Arc<AnalysisOptions>,
) -> PageResult {
    let RecognizedPage {
        image_path,
        observations,
    } = page;
    debug!("Page {}: analyzing {} observations", index, observations.len());

    let analyzed =
        tokio::task::spawn_blocking(move || analysis::analyze_page(&observations, &options)).await;

    match analyzed {
        Ok(Ok(metadata)) => PageResult::succeeded(index, image_path, metadata),
        Ok(Err(e)) => PageResult::failed(index, image_path, &e),
        Err(e) => PageResult::failed(
            index,
            image_path,
            &ScanError::Processing(format!("analysis task failed: {}", e)),
        ),
    }
}
