//! Tesseract recognition engine (CLI wrapper).

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::record::RecognitionResult;

use super::{ProgressReporter, RecognitionEngine, RECOGNITION_LANGUAGES};

/// Configuration for the Tesseract CLI engine.
#[derive(Debug, Clone)]
pub struct TesseractConfig {
    /// Path to the tesseract binary; `tesseract` on PATH when unset.
    pub binary_path: Option<String>,

    /// Recognition languages in tesseract notation.
    pub languages: String,

    /// Page segmentation mode. 3 (fully automatic) suits label photos.
    pub psm: u32,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            binary_path: None,
            languages: RECOGNITION_LANGUAGES.to_string(),
            psm: 3,
        }
    }
}

impl TesseractConfig {
    fn binary(&self) -> &str {
        self.binary_path.as_deref().unwrap_or("tesseract")
    }
}

/// Recognition engine backed by the `tesseract` command-line binary.
pub struct TesseractEngine {
    config: TesseractConfig,
    version: String,
}

impl TesseractEngine {
    /// Create an engine, probing the binary so missing installs fail early.
    pub fn new(config: TesseractConfig) -> Result<Self, EngineError> {
        let version = probe_version(config.binary())?;
        info!("tesseract available, version {}", version);
        Ok(Self { config, version })
    }

    /// Engine version string reported by the binary.
    pub fn version(&self) -> &str {
        &self.version
    }
}

#[async_trait]
impl RecognitionEngine for TesseractEngine {
    async fn recognize(
        &self,
        image: &[u8],
        progress: &ProgressReporter<'_>,
    ) -> Result<RecognitionResult, EngineError> {
        let start = Instant::now();
        progress.report(5);

        // Tesseract wants a file; decode and re-encode so any format the
        // image crate understands works as input.
        let decoded = image::load_from_memory(image)
            .map_err(|e| EngineError::InvalidImage(e.to_string()))?;

        let scratch = tempfile::Builder::new()
            .prefix("cantina_label_")
            .suffix(".png")
            .tempfile()?;
        decoded
            .save(scratch.path())
            .map_err(|e| EngineError::InvalidImage(e.to_string()))?;

        progress.report(25);
        debug!(
            "running {} on {} ({} bytes in)",
            self.config.binary(),
            scratch.path().display(),
            image.len()
        );

        // The CLI exposes no incremental progress; milestones only.
        let output = tokio::process::Command::new(self.config.binary())
            .arg(scratch.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.languages)
            .arg("--psm")
            .arg(self.config.psm.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EngineError::Recognition(stderr.trim().to_string()));
        }

        progress.report(95);
        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        let elapsed = start.elapsed().as_millis() as u64;
        info!("recognition complete: {} characters in {}ms", text.len(), elapsed);

        Ok(RecognitionResult {
            text,
            processing_time_ms: elapsed,
        })
    }
}

fn probe_version(binary: &str) -> Result<String, EngineError> {
    let output = std::process::Command::new(binary)
        .arg("--version")
        .output()
        .map_err(|e| EngineError::Unavailable(format!("{}: {}", binary, e)))?;

    if !output.status.success() {
        return Err(EngineError::Unavailable(format!(
            "{} --version exited with {}",
            binary, output.status
        )));
    }

    // First line is "tesseract X.Y.Z"; stderr on some builds.
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stdout
        .lines()
        .chain(stderr.lines())
        .next()
        .unwrap_or("")
        .trim()
        .to_string();

    if line.is_empty() {
        return Err(EngineError::Unavailable(format!(
            "{} reported no version",
            binary
        )));
    }

    Ok(line)
}
