//! Core library for wine label digitization.
//!
//! This crate provides:
//! - Recognition engine abstraction with a Tesseract CLI adapter
//! - Heuristic label field extraction (name, producer, vintage, region,
//!   denomination, alcohol strength)
//! - Candidate record model with a coarse confidence tier
//! - The digitization pipeline composing recognition, the minimum-text
//!   policy, parsing, and result assembly

pub mod engine;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod record;

pub use engine::{
    ProgressReporter, RecognitionEngine, TesseractConfig, TesseractEngine, RECOGNITION_LANGUAGES,
};
pub use error::{CantinaError, EngineError, Result};
pub use parser::{parse, LabelParser};
pub use pipeline::{LabelDigitizer, DEFAULT_MIN_TEXT_LEN};
pub use record::{CandidateRecord, ConfidenceTier, ImageRef, RecognitionResult};
