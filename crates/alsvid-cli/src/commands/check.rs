//! Check command implementation.

use anyhow::Result;
use console::style;

use super::common::load_circuit;

/// Execute the check command: parse and validate without optimizing.
pub fn execute(input: &str) -> Result<()> {
    let circuit = load_circuit(input)?;

    println!(
        "{} {} is valid: {} qubits, {} cbits, {} gates ({} permutation)",
        style("✓").green().bold(),
        style(input).green(),
        circuit.num_qubits(),
        circuit.num_cbits(),
        circuit.num_gates(),
        circuit.num_permutation_gates()
    );

    Ok(())
}
