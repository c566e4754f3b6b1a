//! Alsvid Circuit Intermediate Representation
//!
//! Core data structures for representing reversible-gate assembly
//! programs. A program is a flat [`Circuit`]: an ordered list of bit
//! declarations followed by an ordered gate stream. There is no graph
//! structure; the optimization passes work directly on gate ranges.
//!
//! # Core Components
//!
//! - **Bits**: [`Bit`] / [`BitKind`] for quantum and classical bit
//!   declarations, referenced by name
//! - **Gate table**: [`GateSpec`] entries in the static [`GATE_SPECS`]
//!   table, mapping a gate name to its arity and classification
//! - **Gates**: [`Gate`] invocations pairing a table entry with operand
//!   names and a source line
//! - **Circuit**: [`Circuit`] container with a validating builder API
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::Circuit;
//!
//! let mut circuit = Circuit::new();
//! circuit.add_qubit("a").unwrap();
//! circuit.add_qubit("b").unwrap();
//! circuit.cnot("a", "b").unwrap();
//! circuit.h("a").unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_permutation_gates(), 1);
//! ```

pub mod bit;
pub mod circuit;
pub mod error;
pub mod gate;

pub use bit::{Bit, BitKind};
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{GATE_SPECS, Gate, GateClass, GateSpec, PermKind};
