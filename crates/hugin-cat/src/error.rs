//! Error types for the gadget crate.

use hugin_ir::IrError;
use thiserror::Error;

/// Errors produced by cat-gadget configuration and synthesis.
///
/// All variants are programming errors: they are fatal, surfaced
/// immediately and never retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatError {
    /// The number of qubits has not been set.
    #[error("The number of qubits has not been set")]
    Unconfigured,

    /// Classical-bit handle list does not match the gadget's
    /// measurement count.
    #[error("{gadget} expects {expected} classical bits, got {got}")]
    ClbitCountMismatch {
        /// Which gadget the wiring was for.
        gadget: &'static str,
        /// Number of classical bits the gadget measures into.
        expected: u32,
        /// Handles supplied by the caller.
        got: u32,
    },

    /// Qubit handle list does not match the configured qubit count.
    #[error("{gadget} expects {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Which gadget the wiring was for.
        gadget: &'static str,
        /// Configured qubit count.
        expected: u32,
        /// Handles supplied by the caller.
        got: u32,
    },

    /// Sequence builder returned an error.
    #[error("Sequence IR error: {0}")]
    Ir(#[from] IrError),
}

/// Result type for gadget operations.
pub type CatResult<T> = Result<T, CatError>;
