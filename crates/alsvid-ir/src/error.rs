//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur when building circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate type not present in the gate table.
    #[error("Unknown gate type '{0}'")]
    UnknownGateType(String),

    /// A gate operand names a bit that was never declared.
    #[error("Bit '{name}' not found in circuit (gate: {gate})")]
    BitNotFound {
        /// The missing bit name.
        name: String,
        /// Name of the gate referencing it.
        gate: String,
    },

    /// Operand count does not match the gate's arity.
    #[error("Gate '{gate}' takes {expected} operands, got {got}")]
    OperandCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Arity from the gate table.
        expected: usize,
        /// Number of operands provided.
        got: usize,
    },

    /// The same bit appears twice in one gate.
    #[error("Duplicate operand '{name}' in gate '{gate}'")]
    DuplicateOperand {
        /// Name of the gate.
        gate: String,
        /// The repeated bit name.
        name: String,
    },

    /// A bit with this name is already declared.
    #[error("Bit '{0}' is already declared")]
    DuplicateBit(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
