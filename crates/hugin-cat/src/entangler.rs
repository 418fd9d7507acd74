//! Cat entangler: distributes a logical control qubit across a register.
//!
//! Prepares a cat (GHZ) state over the ancilla/target qubits, entangles
//! the logical control into it, measures the helper qubit and corrects
//! the remaining targets on the measured outcome. After the sequence the
//! control value on qubit 0 is replicated across qubits `2..n-1`, with
//! qubit 1 consumed by the measurement.

use hugin_ir::{Circuit, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CatResult;
use crate::gadget::GadgetState;

/// Builder for the cat-entangling operation sequence.
///
/// Qubit 0 is the logical control; qubit 1 is the measured helper;
/// qubits `2..n-1` receive the distributed control value. The gadget
/// measures into exactly one classical bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatEntangler {
    name: String,
    state: GadgetState,
}

impl CatEntangler {
    /// Create an unconfigured entangler.
    pub fn new() -> Self {
        Self {
            name: "cat_entangler".into(),
            state: GadgetState::default(),
        }
    }

    /// Create an entangler configured for `num_qubits` qubits.
    pub fn with_num_qubits(num_qubits: u32) -> Self {
        let mut entangler = Self::new();
        entangler.configure(num_qubits);
        entangler
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

    /// Number of classical bits the emitted sequence measures into.
    pub fn required_clbits(&self) -> u32 {
        1
    }

    /// Produce the operation sequence, or return the cached one.
    pub fn build(&mut self) -> CatResult<&Circuit> {
        let name = self.name.clone();
        self.state.build_with(|num_qubits| synthesize(&name, num_qubits))
    }
}

impl Default for CatEntangler {
    fn default() -> Self {
        Self::new()
    }
}

fn synthesize(name: &str, num_qubits: u32) -> CatResult<Circuit> {
    let mut circuit = Circuit::with_size(name, num_qubits, 1);

    // Below 3 qubits there is nothing to distribute.
    if num_qubits < 3 {
        debug!(num_qubits, "qubit count below 3, emitting empty sequence");
        return Ok(circuit);
    }

    debug!(num_qubits, "synthesising cat entangler sequence");

    // Cat-state preparation over qubits 1..n-1. Qubit 0 stays out of the
    // chain; it enters through the entangling CX after the fence.
    circuit.h(QubitId(1))?;
    for i in 1..num_qubits - 1 {
        circuit.cx(QubitId(i), QubitId(i + 1))?;
    }

    circuit.barrier_all()?;

    circuit.cx(QubitId(0), QubitId(1))?;
    circuit.measure(QubitId(1), ClbitId(0))?;
    for i in 2..num_qubits {
        circuit.x_if(QubitId(i), ClbitId(0))?;
    }

    Ok(circuit)
}
