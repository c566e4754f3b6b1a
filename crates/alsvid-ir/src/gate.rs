//! Gate types and the static gate-spec table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The permutation gates the optimizer knows how to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PermKind {
    /// Controlled-NOT: one control, one target.
    Cnot,
    /// Toffoli: two controls, one target.
    Toffoli,
}

/// Behavioral classification of a gate type.
///
/// The gate table determines arity and validity; dispatch in the
/// optimizer goes through this closed variant set, never through the
/// gate-name string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateClass {
    /// A classical bit permutation / XOR update.
    Permutation(PermKind),
    /// A single-operand gate: unitaries, measurements, preparations.
    SingleBit,
    /// Any other multi-operand gate; opaque to the optimizer.
    Other,
}

/// Static description of one supported gate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateSpec {
    /// The gate name as written in the assembly text.
    pub name: &'static str,
    /// Number of bit operands.
    pub num_operands: usize,
    /// Number of classical bits the gate produces.
    pub num_clbits: usize,
    /// Behavioral classification.
    pub class: GateClass,
}

const fn perm(name: &'static str, num_operands: usize, num_clbits: usize, kind: PermKind) -> GateSpec {
    GateSpec {
        name,
        num_operands,
        num_clbits,
        class: GateClass::Permutation(kind),
    }
}

const fn single(name: &'static str) -> GateSpec {
    GateSpec {
        name,
        num_operands: 1,
        num_clbits: 0,
        class: GateClass::SingleBit,
    }
}

const fn other(name: &'static str, num_operands: usize, num_clbits: usize) -> GateSpec {
    GateSpec {
        name,
        num_operands,
        num_clbits,
        class: GateClass::Other,
    }
}

/// The process-wide gate table.
///
/// Names are matched exactly; `h` and `H` are distinct entries so either
/// spelling survives a round trip unchanged.
pub static GATE_SPECS: &[GateSpec] = &[
    perm("CNOT", 2, 1, PermKind::Cnot),
    perm("Tof", 3, 2, PermKind::Toffoli),
    other("c-z", 2, 1),
    other("c-x", 2, 1),
    other("ZZ", 2, 0),
    other("SS", 2, 0),
    other("swap", 2, 0),
    other("Utwo", 2, 0),
    single("measure"),
    single("MeasX"),
    single("MeasY"),
    single("MeasZ"),
    single("dmeter"),
    single("h"),
    single("H"),
    single("X"),
    single("Y"),
    single("Z"),
    single("S"),
    single("T"),
    single("Tdag"),
    single("U"),
    single("zero"),
    single("nop"),
    single("PrepZ"),
    single("PrepY"),
    single("PrepX"),
    single("discard"),
    single("slash"),
    single("space"),
];

impl GateSpec {
    /// Look up a gate type by its exact name.
    pub fn find(name: &str) -> Option<&'static GateSpec> {
        GATE_SPECS.iter().find(|spec| spec.name == name)
    }

    /// The permutation kind, if this is a permutation gate.
    pub fn perm_kind(&self) -> Option<PermKind> {
        match self.class {
            GateClass::Permutation(kind) => Some(kind),
            _ => None,
        }
    }

    /// Check if this gate is a permutation gate (CNOT or Toffoli).
    pub fn is_permutation(&self) -> bool {
        matches!(self.class, GateClass::Permutation(_))
    }
}

/// A gate invocation: a gate type applied to named bits.
///
/// Operands are pairwise distinct and their count equals the table arity;
/// both are enforced at construction sites. A gate is never mutated after
/// creation: operand rewriting during emission produces a new `Gate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    /// The gate type.
    pub spec: &'static GateSpec,
    /// Operand bit names, in written order.
    pub operands: Vec<String>,
    /// 1-based source line, or 0 for programmatically built gates.
    pub line: usize,
}

impl Gate {
    /// Create a new gate.
    pub fn new(
        spec: &'static GateSpec,
        operands: impl IntoIterator<Item = impl Into<String>>,
        line: usize,
    ) -> Self {
        Self {
            spec,
            operands: operands.into_iter().map(Into::into).collect(),
            line,
        }
    }

    /// The gate-type name.
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Behavioral classification of the gate type.
    pub fn class(&self) -> GateClass {
        self.spec.class
    }

    /// Check if this is a permutation gate.
    pub fn is_permutation(&self) -> bool {
        self.spec.is_permutation()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.spec.name, self.operands.join(","))
    }
}
