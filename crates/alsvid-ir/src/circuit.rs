//! Circuit container and builder API.

use rustc_hash::FxHashSet;

use crate::bit::{Bit, BitKind};
use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateClass, GateSpec};

/// A circuit: an ordered bit declaration list plus an ordered gate stream.
///
/// The builder methods validate every gate against the gate table before
/// accepting it, so a constructed `Circuit` always satisfies the operand
/// invariants downstream passes rely on.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    /// Declared bits, in declaration order.
    bits: Vec<Bit>,
    /// Gates, in program order.
    gates: Vec<Gate>,
    /// Declared names, for O(1) operand checks.
    names: FxHashSet<String>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a quantum bit.
    pub fn add_qubit(&mut self, name: impl Into<String>) -> IrResult<&mut Self> {
        self.add_bit(Bit::quantum(name))
    }

    /// Declare a classical bit.
    pub fn add_cbit(&mut self, name: impl Into<String>) -> IrResult<&mut Self> {
        self.add_bit(Bit::classical(name))
    }

    /// Declare a bit, rejecting duplicate names.
    pub fn add_bit(&mut self, bit: Bit) -> IrResult<&mut Self> {
        if !self.names.insert(bit.name.clone()) {
            return Err(IrError::DuplicateBit(bit.name));
        }
        self.bits.push(bit);
        Ok(self)
    }

    /// Append a gate after validating it against the gate table.
    pub fn apply(&mut self, gate: Gate) -> IrResult<&mut Self> {
        if gate.operands.len() != gate.spec.num_operands {
            return Err(IrError::OperandCountMismatch {
                gate: gate.name().into(),
                expected: gate.spec.num_operands,
                got: gate.operands.len(),
            });
        }
        for (i, op) in gate.operands.iter().enumerate() {
            if gate.operands[..i].contains(op) {
                return Err(IrError::DuplicateOperand {
                    gate: gate.name().into(),
                    name: op.clone(),
                });
            }
            if !self.names.contains(op) {
                return Err(IrError::BitNotFound {
                    name: op.clone(),
                    gate: gate.name().into(),
                });
            }
        }
        self.gates.push(gate);
        Ok(self)
    }

    /// Append a gate by table name.
    pub fn gate(&mut self, name: &str, operands: &[&str]) -> IrResult<&mut Self> {
        let spec =
            GateSpec::find(name).ok_or_else(|| IrError::UnknownGateType(name.to_string()))?;
        self.apply(Gate::new(spec, operands.iter().copied(), 0))
    }

    /// Append a CNOT gate.
    pub fn cnot(&mut self, control: &str, target: &str) -> IrResult<&mut Self> {
        self.gate("CNOT", &[control, target])
    }

    /// Append a Toffoli gate.
    pub fn tof(&mut self, control1: &str, control2: &str, target: &str) -> IrResult<&mut Self> {
        self.gate("Tof", &[control1, control2, target])
    }

    /// Append a Hadamard gate.
    pub fn h(&mut self, bit: &str) -> IrResult<&mut Self> {
        self.gate("H", &[bit])
    }

    /// Append a Pauli-X gate.
    pub fn x(&mut self, bit: &str) -> IrResult<&mut Self> {
        self.gate("X", &[bit])
    }

    /// Append a measurement.
    pub fn measure(&mut self, bit: &str) -> IrResult<&mut Self> {
        self.gate("measure", &[bit])
    }

    /// The declared bits, in declaration order.
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// The gate stream, in program order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Replace the gate stream, keeping declarations.
    ///
    /// Used by transformation passes; callers must only reference
    /// declared bit names.
    pub fn set_gates(&mut self, gates: Vec<Gate>) {
        self.gates = gates;
    }

    /// Check whether a bit name is declared.
    pub fn is_declared(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of declared quantum bits.
    pub fn num_qubits(&self) -> usize {
        self.bits
            .iter()
            .filter(|b| b.kind == BitKind::Quantum)
            .count()
    }

    /// Number of declared classical bits.
    pub fn num_cbits(&self) -> usize {
        self.bits
            .iter()
            .filter(|b| b.kind == BitKind::Classical)
            .count()
    }

    /// Total number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Number of permutation gates (CNOT and Toffoli).
    pub fn num_permutation_gates(&self) -> usize {
        self.gates.iter().filter(|g| g.is_permutation()).count()
    }

    /// Gate count for one classification.
    pub fn count_class(&self, class: GateClass) -> usize {
        self.gates.iter().filter(|g| g.class() == class).count()
    }
}
