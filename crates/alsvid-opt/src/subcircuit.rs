//! Segmentation of gate streams into classical subcircuits.

use rustc_hash::FxHashSet;

use alsvid_ir::Circuit;

/// A contiguous run of gates in which every permutation gate acts only
/// on bits untouched by non-permutation gates since the run began.
///
/// Subcircuits partition the full gate index range without gaps or
/// overlaps; their union in order reconstructs the whole program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicalSubcircuit {
    /// Index of the first gate in the run.
    pub start: usize,
    /// Number of gates in the run.
    pub len: usize,
    /// Bits used by the run's permutation gates, in declaration order.
    pub active_bits: Vec<String>,
}

impl ClassicalSubcircuit {
    /// The gate index range covered by this subcircuit.
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.start + self.len
    }
}

/// Partition a circuit's gate stream into classical subcircuits.
///
/// A permutation gate whose operand was already touched by a
/// non-permutation gate closes the current subcircuit and opens a new
/// one at that gate. The boundary guarantees that optimization never
/// reorders a CNOT or Toffoli across a gate that depends on, or
/// redefines, one of its operands.
pub fn segment(circuit: &Circuit) -> Vec<ClassicalSubcircuit> {
    let gates = circuit.gates();
    if gates.is_empty() {
        return Vec::new();
    }

    let mut subcircuits = Vec::new();
    let mut start = 0usize;
    let mut used: FxHashSet<&str> = FxHashSet::default();
    let mut forbidden: FxHashSet<&str> = FxHashSet::default();

    for (index, gate) in gates.iter().enumerate() {
        if gate.is_permutation() {
            if gate
                .operands
                .iter()
                .any(|op| forbidden.contains(op.as_str()))
            {
                subcircuits.push(close(circuit, start, index, &used));
                start = index;
                used.clear();
                forbidden.clear();
            }
            for op in &gate.operands {
                used.insert(op);
            }
        } else {
            // These bits can no longer join the active permutation run.
            for op in &gate.operands {
                forbidden.insert(op);
            }
        }
    }

    subcircuits.push(close(circuit, start, gates.len(), &used));
    subcircuits
}

fn close(
    circuit: &Circuit,
    start: usize,
    end: usize,
    used: &FxHashSet<&str>,
) -> ClassicalSubcircuit {
    let active_bits = circuit
        .bits()
        .iter()
        .filter(|bit| used.contains(bit.name.as_str()))
        .map(|bit| bit.name.clone())
        .collect();

    ClassicalSubcircuit {
        start,
        len: end - start,
        active_bits,
    }
}
