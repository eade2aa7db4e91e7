//! Inventory command - reduce an invoice text file to an inventory update.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use tracing::info;

use stockline_core::{InventoryTransformer, InvoiceTextParser, TextParser};

use super::{emit, read_input};

/// Arguments for the inventory command.
#[derive(Args)]
pub struct InventoryArgs {
    /// Input text file (OCR output)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fallback date (YYYY-MM-DD) when the invoice has none (default: today)
    #[arg(short, long)]
    date: Option<String>,

    /// Emit compact single-line JSON
    #[arg(long)]
    compact: bool,
}

pub fn run(args: InventoryArgs) -> anyhow::Result<()> {
    let text = read_input(&args.input)?;
    info!("Building inventory update from: {}", args.input.display());

    let parsed = InvoiceTextParser::new().parse(&text);
    let mut update = InventoryTransformer::new().to_update(Some(&parsed));

    // The transformer leaves the date absent when the invoice had none;
    // the fallback is a caller-level concern, which is us.
    if update.date.is_none() {
        update.date = Some(
            args.date
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
        );
    }

    let json = if args.compact {
        update.to_json()?
    } else {
        update.to_json_pretty()?
    };

    emit(args.output.as_deref(), &json)
}
