//! Error types for the IR crate.

use crate::qubit::{ClbitId, QubitId};
use thiserror::Error;

/// Errors that can occur when building or composing operation sequences.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in the sequence.
    #[error("Qubit {qubit:?} not found in sequence{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Classical bit not found in the sequence.
    #[error("Classical bit {clbit:?} not found in sequence{}", format_gate_context(.gate_name))]
    ClbitNotFound {
        /// The classical bit that was not found.
        clbit: ClbitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in an operation.
    #[error("Duplicate qubit {qubit:?} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Handle list passed to `compose` does not match the inserted
    /// sequence's width.
    #[error("Composition {kind} list has {got} handles, inserted sequence has {expected}")]
    CompositionMismatch {
        /// Which handle list mismatched ("qubit" or "clbit").
        kind: &'static str,
        /// Width of the inserted sequence.
        expected: usize,
        /// Handles supplied by the caller.
        got: usize,
    },

    /// Custom gate matrix has the wrong dimension.
    #[error("Matrix length {got} does not match expected {expected} for {num_qubits}-qubit gate")]
    InvalidMatrix {
        /// Expected number of entries, `(2^num_qubits)^2`.
        expected: usize,
        /// Supplied number of entries.
        got: usize,
        /// Gate width.
        num_qubits: u32,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
