//! Cat disentangler: collapses a distributed control back to one qubit.
//!
//! Rotates the spread qubits into the X basis, measures each one out and
//! applies the corrections its outcome calls for: a bit-flip on the
//! measured qubit itself and a phase-flip on the retained control qubit.
//! This undoes the spread the entangler performed while preserving the
//! phase information accumulated on the control.

use hugin_ir::{Circuit, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatResult;
use crate::gadget::GadgetState;

/// Builder for the cat-disentangling operation sequence.
///
/// Qubits `2..n-1` are measured out, one classical bit each; qubits 0
/// and 1 are retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatDisentangler {
    name: String,
    state: GadgetState,
}

impl CatDisentangler {
    /// Create an unconfigured disentangler.
    pub fn new() -> Self {
        Self {
            name: "cat_disentangler".into(),
            state: GadgetState::default(),
        }
    }

    /// Create a disentangler configured for `num_qubits` qubits.
    pub fn with_num_qubits(num_qubits: u32) -> Self {
        let mut disentangler = Self::new();
        disentangler.configure(num_qubits);
        disentangler
    }

    /// Override the sequence name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the number of qubits, discarding any cached sequence.
    pub fn configure(&mut self, num_qubits: u32) {
        self.state.configure(num_qubits);
    }

    /// Check configuration completeness.
    ///
    /// Fails with [`crate::CatError::Unconfigured`] iff the qubit count
    /// is unset; callable in any state.
    pub fn validate(&self) -> CatResult<()> {
        self.state.validate()
    }

    /// The configured qubit count, if any.
    pub fn num_qubits(&self) -> Option<u32> {
        self.state.num_qubits()
    }

    /// Whether a cached sequence exists.
    pub fn is_built(&self) -> bool {
        self.state.is_built()
    }

    /// Number of classical bits the emitted sequence measures into:
    /// one per removed qubit. `None` until configured.
    pub fn required_clbits(&self) -> Option<u32> {
        self.state.num_qubits().map(|n| n.saturating_sub(2))
    }

    /// Produce the operation sequence, or return the cached one.
    pub fn build(&mut self) -> CatResult<&Circuit> {
        let name = self.name.clone();
        self.state.build_with(|num_qubits| synthesize(&name, num_qubits))
    }
}

impl Default for CatDisentangler {
    fn default() -> Self {
        Self::new()
    }
}

fn synthesize(name: &str, num_qubits: u32) -> CatResult<Circuit> {
    let num_clbits = num_qubits.saturating_sub(2);
    let mut circuit = Circuit::with_size(name, num_qubits, num_clbits);

    if num_qubits < 3 {
        debug!(num_qubits, "qubit count below 3, emitting empty sequence");
        return Ok(circuit);
    }

    debug!(num_qubits, num_clbits, "synthesising cat disentangler sequence");

    circuit.barrier_all()?;

    // X-basis rotation so measuring reveals whether the retained control
    // needs a phase correction.
    for i in 2..num_qubits {
        circuit.h(QubitId(i))?;
    }

    // Measure each spread qubit out; both corrections hang off the same
    // outcome and act on disjoint qubits.
    for i in 2..num_qubits {
        let clbit = ClbitId(i - 2);
        circuit.measure(QubitId(i), clbit)?;
        circuit.x_if(QubitId(i), clbit)?;
        circuit.z_if(QubitId(0), clbit)?;
    }

    Ok(circuit)
}
