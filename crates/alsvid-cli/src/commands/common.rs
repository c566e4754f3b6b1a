//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

use alsvid_ir::Circuit;
use alsvid_qasm::parse;

/// Load a circuit from a file, or from stdin when the path is `-`.
pub fn load_circuit(input: &str) -> Result<Circuit> {
    let source = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        let path = Path::new(input);
        if !path.exists() {
            anyhow::bail!("File not found: {input}");
        }
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {input}"))?
    };

    parse(&source).map_err(|e| anyhow::anyhow!("{e}"))
}
