//! Bit declarations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a declared bit is quantum or classical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitKind {
    /// A qubit, declared with `qubit <name>`.
    Quantum,
    /// A classical bit, declared with `cbit <name>`.
    Classical,
}

impl BitKind {
    /// The declaration keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            BitKind::Quantum => "qubit",
            BitKind::Classical => "cbit",
        }
    }
}

/// A named bit, declared once and immutable afterwards.
///
/// Bit names are unique within a circuit; gates reference bits by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bit {
    /// The declared name.
    pub name: String,
    /// Quantum or classical.
    pub kind: BitKind,
}

impl Bit {
    /// Create a quantum bit.
    pub fn quantum(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BitKind::Quantum,
        }
    }

    /// Create a classical bit.
    pub fn classical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: BitKind::Classical,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.keyword(), self.name)
    }
}
