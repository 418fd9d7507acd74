//! Shared gadget build lifecycle.

use hugin_ir::Circuit;
use serde::{Deserialize, Serialize};

use crate::error::{CatError, CatResult};

/// Build lifecycle shared by both gadgets.
///
/// The cached sequence lives inside the `Built` variant, so reconfiguring
/// replaces the whole state and discards the cache atomically; there is
/// no separate dirty flag to keep in sync.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) enum GadgetState {
    /// No qubit count set.
    #[default]
    Unconfigured,
    /// Qubit count set, sequence not yet built.
    Configured {
        /// Number of qubits the gadget spans.
        num_qubits: u32,
    },
    /// Sequence built and cached.
    Built {
        /// Number of qubits the gadget spans.
        num_qubits: u32,
        /// The cached operation sequence.
        sequence: Circuit,
    },
}

impl GadgetState {
    /// The configured qubit count, if any.
    pub(crate) fn num_qubits(&self) -> Option<u32> {
        match self {
            GadgetState::Unconfigured => None,
            GadgetState::Configured { num_qubits } | GadgetState::Built { num_qubits, .. } => {
                Some(*num_qubits)
            }
        }
    }

    /// Whether a cached sequence exists.
    pub(crate) fn is_built(&self) -> bool {
        matches!(self, GadgetState::Built { .. })
    }

    /// Fails iff the qubit count is unset. Callable in any state.
    pub(crate) fn validate(&self) -> CatResult<()> {
        match self {
            GadgetState::Unconfigured => Err(CatError::Unconfigured),
            _ => Ok(()),
        }
    }

    /// Set the qubit count, discarding any cached sequence.
    pub(crate) fn configure(&mut self, num_qubits: u32) {
        *self = GadgetState::Configured { num_qubits };
    }

    /// Return the cached sequence, synthesizing it first if needed.
    ///
    /// Idempotent once built: the closure runs at most once per
    /// configuration.
    pub(crate) fn build_with<F>(&mut self, synthesize: F) -> CatResult<&Circuit>
    where
        F: FnOnce(u32) -> CatResult<Circuit>,
    {
        if let GadgetState::Configured { num_qubits } = self {
            let num_qubits = *num_qubits;
            let sequence = synthesize(num_qubits)?;
            *self = GadgetState::Built {
                num_qubits,
                sequence,
            };
        }
        match self {
            GadgetState::Built { sequence, .. } => Ok(sequence),
            _ => Err(CatError::Unconfigured),
        }
    }
}
