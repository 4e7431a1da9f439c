//! Metadata assembly
//!
//! Runs the table, list and data passes over one page and combines their
//! results with the transcript into a [`DocumentMetadata`].

use std::time::Instant;
use tracing::debug;

use super::{detected_data, lists, rows, tables, AnalysisOptions};
use crate::document::DocumentMetadata;
use crate::error::{Result, ScanError};
use crate::vision::TextObservation;

/// Language reported when none was requested
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Join the top candidates in OCR order, one per line, trimmed
pub fn build_transcript(observations: &[TextObservation]) -> String {
    observations
        .iter()
        .map(TextObservation::top_text)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// First requested language, or the fallback when none (or a blank tag) was requested
pub fn primary_language(languages: &[String]) -> String {
    languages
        .first()
        .filter(|l| !l.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Infer the structured metadata of one page
pub fn analyze_page(
    observations: &[TextObservation],
    options: &AnalysisOptions,
) -> Result<DocumentMetadata> {
    if observations.is_empty() {
        return Err(ScanError::NoObservations);
    }

    let start = Instant::now();

    let tables = if options.detect_tables {
        let rows = rows::cluster_rows(observations);
        tables::assemble_tables(&rows, observations.len(), options.detect_data)
    } else {
        Vec::new()
    };

    let lists = if options.detect_lists {
        lists::detect_list(observations).into_iter().collect()
    } else {
        Vec::new()
    };

    let detected_data = if options.detect_data {
        detected_data::classify_lines(observations.iter().map(TextObservation::top_text))
    } else {
        Vec::new()
    };

    let metadata = DocumentMetadata {
        transcript: build_transcript(observations),
        tables,
        lists,
        detected_data,
        language: Some(primary_language(&options.languages)),
    };

    debug!(
        "Analyzed {} observations in {:?}: {} tables, {} lists, {} data items",
        observations.len(),
        start.elapsed(),
        metadata.tables.len(),
        metadata.lists.len(),
        metadata.detected_data.len()
    );

    Ok(metadata)
}
