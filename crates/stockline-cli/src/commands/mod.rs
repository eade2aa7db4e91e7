//! CLI subcommands.

pub mod inventory;
pub mod parse;

use std::fs;
use std::path::Path;

/// Read the OCR text file backing a command, with a friendly error.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}

/// Write JSON to a file or stdout.
pub fn emit(output: Option<&Path>, json: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, json)?;
            println!("Output written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
