//! Alsvid Optimization Framework
//!
//! Local optimization of reversible-gate circuits. The pipeline walks a
//! validated [`Circuit`](alsvid_ir::Circuit) once:
//!
//! 1. **Segmentation** ([`subcircuit`]): the gate stream is partitioned
//!    into classical subcircuits, maximal runs in which CNOT/Toffoli
//!    gates act only on bits untouched by other gate types.
//! 2. **Row encoding** ([`row`]): each permutation gate becomes a signed
//!    vector over the subcircuit's active bits, +1 per control and -1 at
//!    the target.
//! 3. **Reduction** ([`passes::ClassicalOptimization`]): adjacent rows
//!    matching the cancellation or swap-fold pattern are removed; swap
//!    folds rebind wires in the [`RenameTable`](rename::RenameTable)
//!    instead of emitting gates.
//!
//! The optimizer is strictly local: it never matches across a subcircuit
//! boundary and makes no global-minimality claim.
//!
//! # Example
//!
//! ```rust
//! use alsvid_ir::Circuit;
//! use alsvid_opt::PassManager;
//!
//! let mut circuit = Circuit::new();
//! circuit.add_qubit("a").unwrap();
//! circuit.add_qubit("b").unwrap();
//! circuit.cnot("a", "b").unwrap();
//! circuit.cnot("a", "b").unwrap();
//!
//! PassManager::standard().run(&mut circuit).unwrap();
//! assert_eq!(circuit.num_gates(), 0);
//! ```

pub mod error;
pub mod manager;
pub mod pass;
pub mod rename;
pub mod row;
pub mod subcircuit;

// Built-in passes
pub mod passes;

pub use error::{OptimizeError, OptimizeResult};
pub use manager::PassManager;
pub use pass::{Pass, PassKind};
pub use passes::{ClassicalOptimization, optimize};
pub use rename::RenameTable;
pub use subcircuit::{ClassicalSubcircuit, segment};
