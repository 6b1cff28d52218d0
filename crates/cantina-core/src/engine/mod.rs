//! Recognition engine abstraction.
//!
//! The concrete OCR engine is treated as an external capability behind
//! [`RecognitionEngine`], so the parser never depends on a particular
//! recognition library.

mod tesseract;

pub use tesseract::{TesseractConfig, TesseractEngine};

use std::sync::atomic::{AtomicU8, Ordering};

use async_trait::async_trait;

use crate::error::EngineError;
use crate::record::RecognitionResult;

/// Fixed bilingual recognition mode for the label domain.
///
/// Static configuration, not a per-call parameter: wine labels in this
/// catalog are Italian with occasional English.
pub const RECOGNITION_LANGUAGES: &str = "ita+eng";

/// One-way progress notification channel from an engine to its caller.
///
/// Enforces the progress contract: values are clamped to `[0, 100]` and
/// regressions are dropped, so the callback only ever observes a
/// monotonically non-decreasing sequence. Engines may report zero times and
/// need not end at 100; completion is signaled by the call returning.
pub struct ProgressReporter<'a> {
    sink: &'a (dyn Fn(u8) + Send + Sync),
    last: AtomicU8,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(sink: &'a (dyn Fn(u8) + Send + Sync)) -> Self {
        Self {
            sink,
            last: AtomicU8::new(0),
        }
    }

    /// A reporter that discards every notification.
    pub fn disabled() -> ProgressReporter<'static> {
        fn noop(_: u8) {}
        ProgressReporter {
            sink: &noop,
            last: AtomicU8::new(0),
        }
    }

    /// Forward `percent` to the caller unless it would regress.
    pub fn report(&self, percent: u8) {
        let percent = percent.min(100);
        let previous = self.last.fetch_max(percent, Ordering::Relaxed);
        if percent >= previous {
            (self.sink)(percent);
        }
    }

    /// Last value forwarded to the caller.
    pub fn current(&self) -> u8 {
        self.last.load(Ordering::Relaxed)
    }
}

/// Capability trait implemented by each recognition engine adapter.
///
/// Implementations hold no state across calls; concurrent invocations are
/// safe as long as the underlying engine supports concurrent use.
#[async_trait]
pub trait RecognitionEngine: Send + Sync {
    /// Recognize text in an image payload.
    ///
    /// May suspend for multiple seconds. Performs no size or format
    /// validation; any underlying engine error surfaces as [`EngineError`]
    /// without retry.
    async fn recognize(
        &self,
        image: &[u8],
        progress: &ProgressReporter<'_>,
    ) -> Result<RecognitionResult, EngineError>;
}
