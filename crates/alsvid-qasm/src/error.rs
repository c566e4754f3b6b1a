//! Error types for the assembly parser.

use thiserror::Error;

/// Errors that can occur during parsing.
///
/// All parse errors are fatal: the first one aborts the whole pass and
/// there is no partial circuit. Every diagnostic names the offending
/// 1-based source line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Invalid input at line {line}: {message}")]
    LexerError { line: usize, message: String },

    /// Unexpected token.
    #[error("Unexpected token at line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        line: usize,
        expected: String,
        found: String,
    },

    /// Unexpected end of input.
    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: String },

    /// Gate name absent from the gate table.
    #[error("Unknown gate type '{name}' at line {line}")]
    UnknownGate { line: usize, name: String },

    /// Operand count does not match the gate's arity.
    #[error("Gate '{gate}' at line {line} takes {expected} operands, got {got}")]
    OperandCountMismatch {
        line: usize,
        gate: String,
        expected: usize,
        got: usize,
    },

    /// The same bit appears twice in one gate.
    #[error("Duplicate operand '{operand}' in gate '{gate}' at line {line}")]
    DuplicateOperand {
        line: usize,
        gate: String,
        operand: String,
    },

    /// A bit name is declared more than once.
    #[error("Duplicate declaration of bit '{name}' at line {line}")]
    DuplicateDeclaration { line: usize, name: String },

    /// A gate operand names an undeclared bit.
    #[error("Undeclared bit '{name}' in gate '{gate}' at line {line}")]
    UndeclaredBit {
        line: usize,
        gate: String,
        name: String,
    },

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    Circuit(#[from] alsvid_ir::IrError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
