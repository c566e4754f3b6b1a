//! Signed row encoding of permutation gates.

use rustc_hash::FxHashMap;

/// One permutation gate's action as a signed vector over a subcircuit's
/// active bits: +1 at each control position, -1 at the single target
/// position.
///
/// A CNOT or Toffoli is an XOR update, addition over GF(2); the signed
/// integer form exists purely so adjacent rows can be compared
/// structurally. Equal rows compose to the identity regardless of the
/// written control order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    coeffs: Vec<i8>,
}

impl Row {
    /// Encode a permutation gate's operands (controls first, target
    /// last) over the given bit-to-index map.
    ///
    /// # Panics
    ///
    /// Panics if an operand is missing from the map; the segmenter
    /// guarantees every operand of an in-range permutation gate is an
    /// active bit.
    pub fn encode(operands: &[String], slots: &FxHashMap<String, usize>) -> Self {
        let mut coeffs = vec![0i8; slots.len()];
        let (target, controls) = operands
            .split_last()
            .expect("permutation gate with no operands");

        for control in controls {
            let slot = *slots
                .get(control)
                .expect("control bit missing from active set");
            coeffs[slot] = 1;
        }
        let slot = *slots
            .get(target)
            .expect("target bit missing from active set");
        coeffs[slot] = -1;

        Row { coeffs }
    }

    /// Index of the target position.
    pub fn target(&self) -> usize {
        self.coeffs
            .iter()
            .position(|&c| c == -1)
            .expect("row without a target position")
    }

    /// Control positions, in index order.
    pub fn controls(&self) -> Vec<usize> {
        self.coeffs
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 1)
            .map(|(i, _)| i)
            .collect()
    }

    /// The single control position of a CNOT row, if this is one.
    pub fn control(&self) -> Option<usize> {
        match self.controls().as_slice() {
            [c] => Some(*c),
            _ => None,
        }
    }

    /// Check if this row encodes a CNOT (exactly one control).
    pub fn is_cnot(&self) -> bool {
        self.control().is_some()
    }

    /// The row with control and target roles exchanged.
    ///
    /// Only meaningful for CNOT rows, where negation swaps the +1 and -1
    /// positions.
    pub fn reversed(&self) -> Row {
        Row {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }
}
