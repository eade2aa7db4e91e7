//! Parse command - extract a structured invoice record from a text file.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use stockline_core::{InvoiceTextParser, TextParser};

use super::{emit, read_input};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (OCR output)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit compact single-line JSON
    #[arg(long)]
    compact: bool,
}

pub fn run(args: ParseArgs) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;
    info!("Parsing invoice text: {}", args.input.display());

    let parsed = InvoiceTextParser::new().parse(&text);
    let json = if args.compact {
        parsed.to_json()?
    } else {
        parsed.to_json_pretty()?
    };

    emit(args.output.as_deref(), &json)
}
