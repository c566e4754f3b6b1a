//! Error types for the optimization crate.

use thiserror::Error;

/// Errors that can occur while running passes.
///
/// The built-in passes assume a previously validated circuit and never
/// produce user-facing errors themselves; internal inconsistencies are
/// invariant violations and panic instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptimizeError {
    /// Error from the IR crate.
    #[error("IR error: {0}")]
    Ir(#[from] alsvid_ir::IrError),

    /// Pass execution failed.
    #[error("Pass '{name}' failed: {reason}")]
    PassFailed { name: String, reason: String },
}

/// Result type for optimization operations.
pub type OptimizeResult<T> = Result<T, OptimizeError>;
