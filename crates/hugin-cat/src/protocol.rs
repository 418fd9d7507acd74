//! Composition of the gadget pair around a controlled operation.
//!
//! The entangler spreads the logical control across the qubit set, the
//! caller's controlled operation consumes the distributed control, and
//! the disentangler collapses the spread again. This is the building
//! block for running a controlled-phase rotation on a register that
//! lives on another processing node.

use hugin_ir::{Circuit, ClbitId, IrResult, QubitId};
use tracing::debug;

use crate::disentangler::CatDisentangler;
use crate::entangler::CatEntangler;
use crate::error::{CatError, CatResult};

/// One entangle/operate/disentangle round over a shared qubit set.
///
/// Both gadgets are configured to the same width at construction; the
/// wrapper validates the caller's handle lists before composing anything,
/// so a wiring mistake fails the whole round without emitting a partial
/// sequence prefix beyond the already-composed entangler.
#[derive(Debug, Clone)]
pub struct CatProtocol {
    entangler: CatEntangler,
    disentangler: CatDisentangler,
    num_qubits: u32,
}

impl CatProtocol {
    /// Create a protocol round over `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            entangler: CatEntangler::with_num_qubits(num_qubits),
            disentangler: CatDisentangler::with_num_qubits(num_qubits),
            num_qubits,
        }
    }

    /// The qubit count both gadgets are configured for.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Number of classical bits the disentangler half measures into.
    pub fn required_disentangle_clbits(&self) -> u32 {
        self.num_qubits.saturating_sub(2)
    }

    /// Wrap a controlled operation between the gadget pair.
    ///
    /// Composes the entangler onto `circuit` at `qubits` (measuring into
    /// `entangle_clbit`), invokes `controlled` to append the operation
    /// that consumes the distributed control, then composes the
    /// disentangler (measuring into `disentangle_clbits`).
    ///
    /// `qubits` must have exactly the configured width and
    /// `disentangle_clbits` one handle per removed qubit; a mismatch is a
    /// fatal wiring error.
    pub fn apply<F>(
        &mut self,
        circuit: &mut Circuit,
        qubits: &[QubitId],
        entangle_clbit: ClbitId,
        disentangle_clbits: &[ClbitId],
        controlled: F,
    ) -> CatResult<()>
    where
        F: FnOnce(&mut Circuit) -> IrResult<()>,
    {
        if qubits.len() != self.num_qubits as usize {
            return Err(CatError::QubitCountMismatch {
                gadget: "cat_protocol",
                expected: self.num_qubits,
                got: qubits.len() as u32,
            });
        }
        let required = self.required_disentangle_clbits();
        if disentangle_clbits.len() != required as usize {
            return Err(CatError::ClbitCountMismatch {
                gadget: "cat_disentangler",
                expected: required,
                got: disentangle_clbits.len() as u32,
            });
        }

        debug!(
            num_qubits = self.num_qubits,
            "composing entangle/operate/disentangle round"
        );

        let entangler = self.entangler.build()?;
        circuit.compose(entangler, qubits, &[entangle_clbit])?;

        controlled(circuit)?;

        let disentangler = self.disentangler.build()?;
        circuit.compose(disentangler, qubits, disentangle_clbits)?;

        Ok(())
    }
}
