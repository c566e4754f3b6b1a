//! Classical-subcircuit optimization.
//!
//! Cancels adjacent identical CNOT/Toffoli pairs and folds CNOT swap
//! triples into wire relabelings, one classical subcircuit at a time.

use rustc_hash::FxHashMap;
use tracing::debug;

use alsvid_ir::{Circuit, Gate};

use crate::error::OptimizeResult;
use crate::pass::{Pass, PassKind};
use crate::rename::RenameTable;
use crate::row::Row;
use crate::subcircuit::{ClassicalSubcircuit, segment};

/// Classical-subcircuit optimization pass.
///
/// Within each subcircuit, adjacent permutation-gate rows are matched
/// against two patterns:
///
/// - **Cancellation**: identical rows compose to the identity; both
///   gates are dropped.
/// - **Swap fold**: CNOT(a,b) · CNOT(b,a) · CNOT(a,b) computes a SWAP of
///   the two wires; the triple is dropped and the rename table rebinds
///   the wires instead.
///
/// Fold is attempted before cancellation at each position and consumed
/// windows never overlap. Everything else passes through with operands
/// resolved through the rename table accumulated so far. The pass never
/// looks across a subcircuit boundary and never revisits a closed one.
pub struct ClassicalOptimization;

impl ClassicalOptimization {
    /// Create a new classical optimization pass.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClassicalOptimization {
    fn default() -> Self {
        Self::new()
    }
}

impl Pass for ClassicalOptimization {
    fn name(&self) -> &'static str {
        "ClassicalOptimization"
    }

    fn kind(&self) -> PassKind {
        PassKind::Transformation
    }

    fn run(&self, circuit: &mut Circuit) -> OptimizeResult<()> {
        let (optimized, renames) = optimize(circuit);
        debug!(
            "Classical optimization: {} gates -> {}, {} bindings renamed",
            circuit.num_gates(),
            optimized.num_gates(),
            renames.num_renamed()
        );
        *circuit = optimized;
        Ok(())
    }

    fn should_run(&self, circuit: &Circuit) -> bool {
        circuit.num_permutation_gates() > 0
    }
}

/// Optimize a circuit, returning the rewritten circuit together with the
/// final logical-to-physical binding produced by swap folds.
///
/// The rename table is threaded through the subcircuits in program
/// order; every retained gate is emitted with its operands resolved
/// through the bindings accumulated up to its position.
pub fn optimize(circuit: &Circuit) -> (Circuit, RenameTable) {
    let mut table = RenameTable::identity(circuit.bits());
    let mut gates: Vec<Gate> = Vec::with_capacity(circuit.num_gates());

    for sub in segment(circuit) {
        reduce_subcircuit(circuit, &sub, &mut table, &mut gates);
    }

    let mut optimized = circuit.clone();
    optimized.set_gates(gates);
    (optimized, table)
}

/// Rewrite one subcircuit's gate range onto `out`.
///
/// Permutation gates are resolved through the current table, encoded as
/// rows, and held on a reduction stack; non-permutation gates pass
/// straight through at their original relative position. Matching on
/// resolved rows is what keeps a pair of textually identical CNOTs from
/// cancelling across a fold that rebound their wires.
fn reduce_subcircuit(
    circuit: &Circuit,
    sub: &ClassicalSubcircuit,
    table: &mut RenameTable,
    out: &mut Vec<Gate>,
) {
    // Physical wires of the active bits at subcircuit entry. Folds only
    // ever exchange wires within this set, so the slot index stays valid
    // for the whole run.
    let phys: Vec<String> = sub
        .active_bits
        .iter()
        .map(|name| table.resolve(name).to_string())
        .collect();
    let slots: FxHashMap<String, usize> = phys
        .iter()
        .enumerate()
        .map(|(slot, name)| (name.clone(), slot))
        .collect();

    // Positions in `out` of rows still eligible for matching.
    let mut pending: Vec<(usize, Row)> = Vec::new();

    for gate in &circuit.gates()[sub.range()] {
        let resolved = table.resolve_gate(gate);
        if gate.is_permutation() {
            let row = Row::encode(&resolved.operands, &slots);
            out.push(resolved);
            pending.push((out.len() - 1, row));
            reduce_tail(out, &mut pending, &phys, table);
        } else {
            out.push(resolved);
        }
    }
}

/// Match and consume patterns at the top of the reduction stack.
///
/// Rows that become adjacent after a consumed window are re-examined, so
/// each subcircuit reaches a local fixed point in one sweep.
fn reduce_tail(
    out: &mut Vec<Gate>,
    pending: &mut Vec<(usize, Row)>,
    phys: &[String],
    table: &mut RenameTable,
) {
    loop {
        let n = pending.len();

        // Swap fold, attempted first.
        if n >= 3 {
            let (first, second, third) = (&pending[n - 3].1, &pending[n - 2].1, &pending[n - 1].1);
            if first.is_cnot() && third == first && *second == first.reversed() {
                let control = first.control().expect("CNOT row has one control");
                let target = first.target();
                drop_pending(out, pending, 3);
                table.swap_physical(&phys[control], &phys[target]);
                continue;
            }
        }

        // Cancellation of identical adjacent rows.
        if n >= 2 && pending[n - 1].1 == pending[n - 2].1 {
            drop_pending(out, pending, 2);
            continue;
        }

        break;
    }
}

/// Remove the top `count` pending rows and their emitted gates.
fn drop_pending(out: &mut Vec<Gate>, pending: &mut Vec<(usize, Row)>, count: usize) {
    // Newest first, so earlier positions stay valid.
    for _ in 0..count {
        let (pos, _) = pending.pop().expect("pending row underflow");
        out.remove(pos);
    }
}
