//! Candidate record model produced by label digitization.

use serde::{Deserialize, Serialize};

/// Coarse signal for how much structured data the parser extracted.
///
/// Current rules only reach `Medium` (a vintage year was found); `High` is
/// kept so a richer scoring rule can use it without a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl Default for ConfidenceTier {
    fn default() -> Self {
        Self::Low
    }
}

/// Opaque reference to the source photograph.
///
/// The core never interprets this; it is whatever handle the caller uses
/// downstream (a storage key, a data URL, a file path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw output of a recognition engine invocation.
///
/// Owned by the pipeline call that produced it and discarded after parsing.
#[derive(Debug, Clone)]
pub struct RecognitionResult {
    /// Recognized text; may be empty or noisy.
    pub text: String,

    /// Engine processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Best-effort structured record extracted from a label photograph.
///
/// Every field other than `raw_text`, `confidence` and `image` is either
/// empty/absent or derived from a substring of `raw_text`; the parser never
/// fabricates values. Intended for human confirmation, never authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Best-guess title line.
    pub name: String,

    /// Second-best-guess line, usually the winery.
    pub producer: String,

    /// 4-digit vintage year in [1900, 2030].
    pub vintage: Option<u16>,

    /// First gazetteer region found in the text.
    pub region: String,

    /// Denomination code (DOCG, DOC, IGT, DOP, IGP), uppercased.
    pub denomination: Option<String>,

    /// Alcohol strength token with the decimal comma normalized to a dot.
    pub alcohol: Option<String>,

    /// How much structured signal was extracted.
    pub confidence: ConfidenceTier,

    /// Verbatim recognized text, retained for re-parsing or audit.
    pub raw_text: String,

    /// Reference to the source photo, attached by result assembly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl CandidateRecord {
    /// An all-empty record carrying only the raw text.
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            producer: String::new(),
            vintage: None,
            region: String::new(),
            denomination: None,
            alcohol: None,
            confidence: ConfidenceTier::Low,
            raw_text: raw_text.into(),
            image: None,
        }
    }

    /// Result assembly: attach the opaque source-image reference.
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_low_confidence() {
        let record = CandidateRecord::empty("");
        assert_eq!(record.confidence, ConfidenceTier::Low);
        assert!(record.name.is_empty());
        assert!(record.vintage.is_none());
        assert!(record.image.is_none());
    }

    #[test]
    fn with_image_attaches_reference_verbatim() {
        let record = CandidateRecord::empty("testo").with_image(ImageRef::new("photos/42.jpg"));
        assert_eq!(record.image.unwrap().as_str(), "photos/42.jpg");
    }

    #[test]
    fn confidence_serializes_lowercase() {
        let json = serde_json::to_string(&ConfidenceTier::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
