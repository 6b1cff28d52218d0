//! Digitize command - label photo to candidate record via Tesseract.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use cantina_core::{
    CantinaError, ImageRef, LabelDigitizer, TesseractConfig, TesseractEngine,
    DEFAULT_MIN_TEXT_LEN,
};

/// Arguments for the digitize command.
#[derive(Args)]
pub struct DigitizeArgs {
    /// Label photo (any format the image crate decodes)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Recognition languages passed to tesseract
    #[arg(long, default_value = cantina_core::RECOGNITION_LANGUAGES)]
    lang: String,

    /// Minimum recognized-text length before parsing is attempted
    #[arg(long, default_value_t = DEFAULT_MIN_TEXT_LEN)]
    min_text_len: usize,

    /// Path to the tesseract binary
    #[arg(long)]
    tesseract: Option<String>,
}

pub async fn run(args: DigitizeArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let image = fs::read(&args.input)?;
    info!("digitizing {} ({} bytes)", args.input.display(), image.len());

    let engine = TesseractEngine::new(TesseractConfig {
        binary_path: args.tesseract.clone(),
        languages: args.lang.clone(),
        ..TesseractConfig::default()
    })?;
    let digitizer = LabelDigitizer::new(engine).with_min_text_len(args.min_text_len);

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}%")
            .unwrap()
            .progress_chars("##-"),
    );

    let image_ref = ImageRef::new(args.input.to_string_lossy());
    let result = {
        let pb = pb.clone();
        digitizer
            .digitize(&image, image_ref, move |p| pb.set_position(u64::from(p)))
            .await
    };
    pb.finish_and_clear();

    let record = match result {
        Ok(record) => record,
        Err(CantinaError::InsufficientText { len, min }) => {
            anyhow::bail!(
                "Recognized only {len} characters (minimum {min}); try a clearer photograph"
            );
        }
        Err(e) => return Err(e.into()),
    };

    let output = serde_json::to_string_pretty(&record)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Record written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}
