//! Text observations produced by the OCR engine

use serde::{Deserialize, Serialize};

/// Bounding box in normalized page coordinates.
///
/// All values are fractions of the page size in `[0, 1]`. The origin is the
/// bottom-left corner, so a larger `y` is higher on the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge (y-up coordinates)
    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

/// One ranked text hypothesis for an observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Recognized text
    pub text: String,
    /// Recognition confidence (0.0 - 1.0)
    #[serde(default)]
    pub confidence: f32,
}

impl Candidate {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

/// One recognized line of text with its position on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextObservation {
    /// Candidate strings, highest ranked first
    pub candidates: Vec<Candidate>,
    /// Position on the page
    pub bounding_box: BoundingBox,
}

impl TextObservation {
    /// Create an observation with a single candidate
    pub fn new(text: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self {
            candidates: vec![Candidate::new(text, 1.0)],
            bounding_box,
        }
    }

    /// Create an observation with ranked candidates
    pub fn with_candidates(candidates: Vec<Candidate>, bounding_box: BoundingBox) -> Self {
        Self {
            candidates,
            bounding_box,
        }
    }

    /// Text of the highest ranked candidate, or `""` when there is none
    pub fn top_text(&self) -> &str {
        self.candidates
            .first()
            .map(|c| c.text.as_str())
            .unwrap_or("")
    }

    /// Vertical position (bottom edge, y-up)
    pub fn y(&self) -> f64 {
        self.bounding_box.y
    }

    /// Horizontal position (left edge)
    pub fn x(&self) -> f64 {
        self.bounding_box.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_text_uses_first_candidate() {
        let obs = TextObservation::with_candidates(
            vec![Candidate::new("Invoice", 0.9), Candidate::new("lnvoice", 0.4)],
            BoundingBox::new(0.1, 0.8, 0.3, 0.05),
        );
        assert_eq!(obs.top_text(), "Invoice");
    }

    #[test]
    fn test_top_text_without_candidates() {
        let obs = TextObservation::with_candidates(vec![], BoundingBox::default());
        assert_eq!(obs.top_text(), "");
    }

    #[test]
    fn test_bounding_box_edges() {
        let bbox = BoundingBox::new(0.25, 0.5, 0.5, 0.25);
        assert!((bbox.right() - 0.75).abs() < 1e-9);
        assert!((bbox.top() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "candidates": [{"text": "Total", "confidence": 0.98}],
            "boundingBox": {"x": 0.1, "y": 0.2, "width": 0.3, "height": 0.04}
        }"#;
        let obs: TextObservation = serde_json::from_str(json).unwrap();
        assert_eq!(obs.top_text(), "Total");
        assert!((obs.y() - 0.2).abs() < 1e-9);
    }
}
