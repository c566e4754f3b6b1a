//! Optimize command implementation.

use anyhow::{Context, Result};
use console::style;
use serde::Serialize;
use std::fs;

use alsvid_ir::{Bit, Circuit, GateClass, PermKind};
use alsvid_opt::{optimize, segment};
use alsvid_qasm::emit;

use super::common::load_circuit;

/// JSON summary of one optimization run.
#[derive(Debug, Serialize)]
struct Report {
    declarations: Vec<Bit>,
    subcircuits: usize,
    gates_before: GateCounts,
    gates_after: GateCounts,
    bindings_renamed: usize,
}

/// Gate totals broken down by classification.
#[derive(Debug, Serialize)]
struct GateCounts {
    total: usize,
    cnot: usize,
    toffoli: usize,
    other: usize,
}

impl GateCounts {
    fn of(circuit: &Circuit) -> Self {
        let cnot = circuit.count_class(GateClass::Permutation(PermKind::Cnot));
        let toffoli = circuit.count_class(GateClass::Permutation(PermKind::Toffoli));
        let total = circuit.num_gates();
        Self {
            total,
            cnot,
            toffoli,
            other: total - cnot - toffoli,
        }
    }
}

/// Execute the optimize command.
pub fn execute(input: &str, output: Option<&str>, report: Option<&str>) -> Result<()> {
    let circuit = load_circuit(input)?;
    eprintln!(
        "{} Optimizing {} ({} bits, {} gates)",
        style("→").cyan().bold(),
        style(input).green(),
        circuit.bits().len(),
        circuit.num_gates()
    );

    let subcircuits = segment(&circuit).len();
    let (optimized, renames) = optimize(&circuit);

    eprintln!(
        "{} Done: {} gates -> {} across {} subcircuits",
        style("✓").green().bold(),
        circuit.num_gates(),
        optimized.num_gates(),
        subcircuits
    );

    let text = emit(&optimized);
    match output {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Failed to write file: {path}"))?;
            eprintln!("  Output: {}", style(path).green());
        }
        None => print!("{text}"),
    }

    if let Some(path) = report {
        let report = Report {
            declarations: circuit.bits().to_vec(),
            subcircuits,
            gates_before: GateCounts::of(&circuit),
            gates_after: GateCounts::of(&optimized),
            bindings_renamed: renames.num_renamed(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("Failed to write report: {path}"))?;
        eprintln!("  Report: {}", style(path).green());
    }

    Ok(())
}
