//! Hugin operation-sequence intermediate representation.
//!
//! This crate provides the data structures for representing ordered
//! quantum operation sequences: gates (optionally conditioned on a
//! classical bit), mid-circuit measurements, resets and barriers, plus
//! the [`Circuit`] builder that owns a sequence and composes smaller
//! sequences into larger ones.
//!
//! # Overview
//!
//! A [`Circuit`] is a linear, causally ordered instruction list. It is
//! emitted intent, not execution: a separate backend interprets the
//! sequence, performs the measurements and takes the classically
//! conditioned branches. The builder validates operands eagerly (gate
//! arity, handle existence, duplicate qubits) and preserves relative
//! instruction order under [`Circuit::compose`].
//!
//! # Core Components
//!
//! - **Handles**: [`QubitId`], [`ClbitId`] for addressing quantum and
//!   classical bits, with optional named-register membership
//! - **Gates**: [`StandardGate`] for built-in gates (H, X, CX, etc.) and
//!   [`CustomGate`] for caller-defined operations
//! - **Conditions**: [`ClassicalCondition`] ties a gate to the outcome of
//!   a prior mid-circuit measurement
//! - **Instructions**: [`Instruction`] combining gates with their operands
//! - **Circuit**: [`Circuit`] high-level builder and composition API
//!
//! # Example: conditioned correction after a mid-circuit measurement
//!
//! ```rust
//! use hugin_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("correction", 2, 1);
//!
//! circuit.h(QubitId(0)).unwrap();
//! circuit.measure(QubitId(0), ClbitId(0)).unwrap();
//! // X on qubit 1 only in the branch where c0 read 1.
//! circuit.x_if(QubitId(1), ClbitId(0)).unwrap();
//!
//! assert!(circuit.conditions_follow_measurements());
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{ClassicalCondition, CustomGate, Gate, GateKind, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId, RegisterRef};
