//! List detection
//!
//! A line is a list item when it starts with a bullet glyph, a hyphen, an
//! asterisk or a number followed by a period, and then whitespace.

use regex::Regex;
use std::sync::LazyLock;

use crate::document::{ListData, ListItemData};
use crate::vision::TextObservation;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[•\-*]|[0-9]+\.)\s").expect("valid list marker regex"));

/// Whether a line of text starts with a list marker
pub fn is_list_item(text: &str) -> bool {
    LIST_MARKER.is_match(text)
}

/// Collect all list lines of a page into a single list.
///
/// Lines keep their OCR order. Returns `None` when no line qualifies.
pub fn detect_list(observations: &[TextObservation]) -> Option<ListData> {
    let items: Vec<ListItemData> = observations
        .iter()
        .map(TextObservation::top_text)
        .filter(|text| is_list_item(text))
        .map(|text| ListItemData {
            text: text.to_string(),
            level: 0,
        })
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(ListData { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::BoundingBox;

    fn lines(texts: &[&str]) -> Vec<TextObservation> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                TextObservation::new(*t, BoundingBox::new(0.1, 0.9 - i as f64 * 0.1, 0.5, 0.03))
            })
            .collect()
    }

    #[test]
    fn test_markers() {
        assert!(is_list_item("• bullet"));
        assert!(is_list_item("- hyphen"));
        assert!(is_list_item("* asterisk"));
        assert!(is_list_item("12. numbered"));
        assert!(is_list_item("1.\ttabbed"));
    }

    #[test]
    fn test_non_markers() {
        assert!(!is_list_item("-no space"));
        assert!(!is_list_item("3) parenthesis"));
        assert!(!is_list_item(" - indented"));
        assert!(!is_list_item("1.5 million"));
        assert!(!is_list_item("plain text"));
        assert!(!is_list_item("-"));
    }

    #[test]
    fn test_detect_list_mixed_lines() {
        let observations = lines(&[
            "* first item",
            "- second item",
            "3. third item",
            "plain paragraph text",
        ]);
        let list = detect_list(&observations).unwrap();

        let texts: Vec<_> = list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["* first item", "- second item", "3. third item"]);
        assert!(list.items.iter().all(|i| i.level == 0));
    }

    #[test]
    fn test_detect_list_keeps_source_order() {
        // Geometry is ignored: the bottom line comes first in the source
        let observations = vec![
            TextObservation::new("- low", BoundingBox::new(0.1, 0.1, 0.2, 0.03)),
            TextObservation::new("- high", BoundingBox::new(0.1, 0.9, 0.2, 0.03)),
        ];
        let list = detect_list(&observations).unwrap();
        assert_eq!(list.items[0].text, "- low");
        assert_eq!(list.items[1].text, "- high");
    }

    #[test]
    fn test_no_list_lines() {
        assert!(detect_list(&lines(&["Invoice", "Total"])).is_none());
        assert!(detect_list(&[]).is_none());
    }
}
