//! Vision/OCR Layer
//!
//! Boundary to the external text recognition engine: the observation types
//! it produces and the sources that supply them page by page.

pub mod observation;
pub mod source;

pub use observation::{BoundingBox, Candidate, TextObservation};
pub use source::{ObservationSource, PageFileSource, RecognizedPage};
