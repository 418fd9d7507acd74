//! `hugin-cat` — cat entangler / disentangler gadgets.
//!
//! Builds the operation sequences that distribute one logical control
//! qubit across several physical qubits for the duration of a controlled
//! operation, and cleanly fold it back afterwards:
//!
//! - [`CatEntangler`] prepares a cat (GHZ) state over the target qubits,
//!   entangles the logical control into it, measures the helper qubit
//!   and corrects the targets on the outcome.
//! - [`CatDisentangler`] measures the spread qubits back out, applying
//!   the bit- and phase-flip corrections each outcome calls for.
//! - [`CatProtocol`] wraps a caller-supplied controlled operation between
//!   the two, composing both sequences into a larger circuit at the
//!   caller's qubit/classical-bit handles.
//!
//! The gadgets emit intent, not execution: every correction is a
//! classically conditioned gate tied to a specific prior mid-circuit
//! measurement, and a downstream backend interprets those conditions at
//! run time.
//!
//! # Quick start
//!
//! ```rust
//! use hugin_cat::CatProtocol;
//! use hugin_ir::Circuit;
//! use std::f64::consts::PI;
//!
//! // Two 2-qubit hosts; host 1 owns the control, host 2 runs the
//! // controlled phase remotely.
//! let mut circuit = Circuit::new("distributed_phase");
//! let host1 = circuit.add_qreg("host1", 2);
//! let host2 = circuit.add_qreg("host2", 2);
//! let cl_aux = circuit.add_creg("cl_aux", 2);
//!
//! circuit.h(host1[0]).unwrap();
//!
//! let mut round = CatProtocol::new(3);
//! round
//!     .apply(
//!         &mut circuit,
//!         &[host1[0], host1[1], host2[0]],
//!         cl_aux[0],
//!         &[cl_aux[1]],
//!         |qc| qc.cp(PI / 2.0, host2[0], host2[1]).map(|_| ()),
//!     )
//!     .unwrap();
//!
//! assert!(circuit.conditions_follow_measurements());
//! ```

pub mod disentangler;
pub mod entangler;
pub mod error;
pub mod protocol;

mod gadget;

pub use disentangler::CatDisentangler;
pub use entangler::CatEntangler;
pub use error::{CatError, CatResult};
pub use protocol::CatProtocol;
