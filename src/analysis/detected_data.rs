//! Structured data classification
//!
//! Classifies a line of text as an email address, phone number or URL.
//! Matchers run in order and the first hit wins. Email and phone numbers
//! must span the whole line; a URL only has to appear somewhere in it.

use regex::Regex;
use std::sync::LazyLock;

use crate::document::{DataKind, DetectedDataItem};

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}";
const PHONE_PATTERN: &str =
    r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$";
const URL_PATTERN: &str = r"(http|https)://[A-Za-z0-9\-.]+\.[A-Za-z]{2,}(/\S*)?";

/// How much of the input a matcher has to cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The whole input must match
    FullString,
    /// Any substring may match
    Substring,
}

/// A single classification rule
#[derive(Debug)]
pub struct DataMatcher {
    pub kind: DataKind,
    pub mode: MatchMode,
    regex: Regex,
}

impl DataMatcher {
    fn new(kind: DataKind, pattern: &str, mode: MatchMode) -> Self {
        let source = match mode {
            MatchMode::FullString => format!("^(?:{})$", pattern),
            MatchMode::Substring => pattern.to_string(),
        };
        Self {
            kind,
            mode,
            regex: Regex::new(&source).expect("valid data matcher regex"),
        }
    }

    /// Whether `text` satisfies this rule
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

// Order matters: first match wins
static MATCHERS: LazyLock<Vec<DataMatcher>> = LazyLock::new(|| {
    vec![
        DataMatcher::new(DataKind::EmailAddress, EMAIL_PATTERN, MatchMode::FullString),
        DataMatcher::new(DataKind::PhoneNumber, PHONE_PATTERN, MatchMode::FullString),
        DataMatcher::new(DataKind::Url, URL_PATTERN, MatchMode::Substring),
    ]
});

/// The ordered classification rules
pub fn matchers() -> &'static [DataMatcher] {
    &MATCHERS
}

/// Classify one line of text.
///
/// Returns at most one item, carrying the whole line as its text.
pub fn classify(text: &str) -> Option<DetectedDataItem> {
    matchers()
        .iter()
        .find(|m| m.matches(text))
        .map(|m| DetectedDataItem::new(text, m.kind))
}

/// Classify each line independently, keeping source order
pub fn classify_lines<'a, I>(lines: I) -> Vec<DetectedDataItem>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(classify).collect()
}
