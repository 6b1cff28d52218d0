//! Label digitization pipeline: recognize, gate, parse, assemble.

use tracing::{debug, info};

use crate::engine::{ProgressReporter, RecognitionEngine};
use crate::error::{CantinaError, Result};
use crate::parser::LabelParser;
use crate::record::{CandidateRecord, ImageRef};

/// Default minimum length (in trimmed characters) of recognized text worth
/// parsing. Rejects single stray OCR tokens while accepting any two-word
/// label line.
pub const DEFAULT_MIN_TEXT_LEN: usize = 10;

/// One-shot label digitizer over a recognition engine.
///
/// Holds no state across invocations; concurrent calls for different images
/// are safe if the underlying engine supports concurrent use. Cancellation is
/// caller-managed by dropping the pending future.
pub struct LabelDigitizer<E> {
    engine: E,
    parser: LabelParser,
    min_text_len: usize,
}

impl<E: RecognitionEngine> LabelDigitizer<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            parser: LabelParser::new(),
            min_text_len: DEFAULT_MIN_TEXT_LEN,
        }
    }

    /// Set the minimum-text policy threshold.
    pub fn with_min_text_len(mut self, min: usize) -> Self {
        self.min_text_len = min;
        self
    }

    /// Digitize a label photograph into a candidate record.
    ///
    /// `on_progress` receives monotonically non-decreasing values in
    /// `[0, 100]`, zero or more times; completion is signaled by this call
    /// returning, not by progress reaching 100. Fails with
    /// [`CantinaError::Engine`] if the engine raises (no retry, no partial
    /// record) and with [`CantinaError::InsufficientText`] when the
    /// recognized text is below the minimum length policy.
    pub async fn digitize(
        &self,
        image: &[u8],
        image_ref: ImageRef,
        on_progress: impl Fn(u8) + Send + Sync,
    ) -> Result<CandidateRecord> {
        let reporter = ProgressReporter::new(&on_progress);

        let recognition = self.engine.recognize(image, &reporter).await?;
        debug!(
            "engine returned {} characters in {}ms",
            recognition.text.len(),
            recognition.processing_time_ms
        );

        let len = recognition.text.trim().chars().count();
        if len < self.min_text_len {
            return Err(CantinaError::InsufficientText {
                len,
                min: self.min_text_len,
            });
        }

        let record = self.parser.parse(&recognition.text);
        info!(
            "digitized label: name={:?} vintage={:?} confidence={:?}",
            record.name, record.vintage, record.confidence
        );

        Ok(record.with_image(image_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::record::{ConfidenceTier, RecognitionResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Engine returning canned text, or failing, with scripted progress.
    struct ScriptedEngine {
        text: Option<&'static str>,
        progress: Vec<u8>,
    }

    #[async_trait]
    impl RecognitionEngine for ScriptedEngine {
        async fn recognize(
            &self,
            _image: &[u8],
            progress: &ProgressReporter<'_>,
        ) -> std::result::Result<RecognitionResult, EngineError> {
            for &p in &self.progress {
                progress.report(p);
            }
            match self.text {
                Some(text) => Ok(RecognitionResult {
                    text: text.to_string(),
                    processing_time_ms: 7,
                }),
                None => Err(EngineError::Recognition("internal engine fault".into())),
            }
        }
    }

    #[tokio::test]
    async fn digitizes_a_label_end_to_end() {
        let engine = ScriptedEngine {
            text: Some("Barolo Riserva\nGiacomo Conterno\nDOCG\n2016\n14.5% vol"),
            progress: vec![10, 60, 95],
        };
        let digitizer = LabelDigitizer::new(engine);

        let record = digitizer
            .digitize(b"jpeg bytes", ImageRef::new("photos/barolo.jpg"), |_| {})
            .await
            .unwrap();

        assert_eq!(record.name, "Barolo Riserva");
        assert_eq!(record.vintage, Some(2016));
        assert_eq!(record.confidence, ConfidenceTier::Medium);
        assert_eq!(record.image.unwrap().as_str(), "photos/barolo.jpg");
    }

    #[tokio::test]
    async fn engine_failure_yields_no_record() {
        let engine = ScriptedEngine {
            text: None,
            progress: vec![15],
        };
        let digitizer = LabelDigitizer::new(engine);

        let err = digitizer
            .digitize(b"corrupt", ImageRef::new("x"), |_| {})
            .await
            .unwrap_err();

        assert!(matches!(err, CantinaError::Engine(_)));
    }

    #[tokio::test]
    async fn short_text_is_rejected_by_policy() {
        let engine = ScriptedEngine {
            text: Some("  ab \n"),
            progress: vec![],
        };
        let digitizer = LabelDigitizer::new(engine);

        let err = digitizer
            .digitize(b"blurry", ImageRef::new("x"), |_| {})
            .await
            .unwrap_err();

        match err {
            CantinaError::InsufficientText { len, min } => {
                assert_eq!(len, 2);
                assert_eq!(min, DEFAULT_MIN_TEXT_LEN);
            }
            other => panic!("expected InsufficientText, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn caller_observes_monotone_progress() {
        let engine = ScriptedEngine {
            text: Some("Barbaresco\nProduttori del Barbaresco"),
            progress: vec![20, 80, 40, 90], // regressing engine
        };
        let digitizer = LabelDigitizer::new(engine);

        let seen = Mutex::new(Vec::new());
        digitizer
            .digitize(b"img", ImageRef::new("x"), |p| seen.lock().unwrap().push(p))
            .await
            .unwrap();

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen, vec![20, 80, 90]);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn custom_threshold_is_honored() {
        let engine = ScriptedEngine {
            text: Some("Roero"),
            progress: vec![],
        };
        let digitizer = LabelDigitizer::new(engine).with_min_text_len(3);

        let record = digitizer
            .digitize(b"img", ImageRef::new("x"), |_| {})
            .await
            .unwrap();
        assert_eq!(record.name, "Roero");
    }
}
