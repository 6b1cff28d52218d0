//! Parse command - recognized text to candidate record, no OCR.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use cantina_core::parse;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Text file with recognized label text, or `-` for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&args.input)?
    };

    debug!("parsing {} characters of label text", text.len());
    let record = parse(&text);

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
