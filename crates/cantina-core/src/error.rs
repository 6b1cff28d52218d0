//! Error types for the cantina-core library.

use thiserror::Error;

/// Main error type for the label digitization pipeline.
#[derive(Error, Debug)]
pub enum CantinaError {
    /// The recognition engine failed. Stable kind so callers can tell
    /// engine trouble apart from text-quality policy.
    #[error("recognition engine failure: {0}")]
    Engine(#[from] EngineError),

    /// Recognition succeeded but produced too little text to parse.
    /// The caller should offer a retry with a clearer photograph.
    #[error("recognized text too short: {len} characters (minimum {min})")]
    InsufficientText { len: usize, min: usize },
}

/// Errors raised by a recognition engine adapter.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine is not installed or not runnable.
    #[error("engine unavailable: {0}")]
    Unavailable(String),

    /// The image payload could not be decoded.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// The engine itself raised during recognition.
    #[error("recognition failed: {0}")]
    Recognition(String),

    /// I/O error while shuttling data to the engine.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the cantina library.
pub type Result<T> = std::result::Result<T, CantinaError>;
