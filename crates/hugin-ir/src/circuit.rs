//! High-level operation-sequence builder API.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{ClassicalCondition, Gate, StandardGate};
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::{Clbit, ClbitId, Qubit, QubitId};

/// An ordered sequence of quantum operations over a set of qubits and
/// classical bits.
///
/// Instructions are kept in emission order; relative order is preserved
/// by construction and by [`Circuit::compose`]. Classically conditioned
/// gates declare their dependency on a prior measurement through the
/// condition's classical bit; the builder never reorders instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Classical bits in the circuit.
    clbits: Vec<Clbit>,
    /// The emitted instructions, in order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            clbits: vec![],
            instructions: vec![],
        }
    }

    /// Create a circuit with a given number of qubits and classical bits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        let mut circuit = Self::new(name);
        for _ in 0..num_qubits {
            circuit.add_qubit();
        }
        for _ in 0..num_clbits {
            circuit.add_clbit();
        }
        circuit
    }

    /// Add a single qubit to the circuit.
    pub fn add_qubit(&mut self) -> QubitId {
        let id = QubitId(self.qubits.len() as u32);
        self.qubits.push(Qubit::new(id));
        id
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = QubitId(self.qubits.len() as u32);
            self.qubits.push(Qubit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    /// Add a single classical bit to the circuit.
    pub fn add_clbit(&mut self) -> ClbitId {
        let id = ClbitId(self.clbits.len() as u32);
        self.clbits.push(Clbit::new(id));
        id
    }

    /// Add a classical register with multiple bits.
    pub fn add_creg(&mut self, name: impl Into<String>, size: u32) -> Vec<ClbitId> {
        let name = name.into();
        let mut ids = vec![];
        for i in 0..size {
            let id = ClbitId(self.clbits.len() as u32);
            self.clbits.push(Clbit::with_register(id, &name, i));
            ids.push(id);
        }
        ids
    }

    /// Append an instruction after validating its operands.
    ///
    /// Validation order: gate arity, qubit existence, classical-bit
    /// existence (including the condition bit of a conditioned gate),
    /// duplicate qubits.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let gate_name = instruction
            .as_gate()
            .map(|gate| gate.name().to_string());

        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = instruction.qubits.len() as u32;
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate.name().to_string(),
                    expected,
                    got,
                });
            }
        }

        for &qubit in &instruction.qubits {
            if qubit.0 as usize >= self.qubits.len() {
                return Err(IrError::QubitNotFound {
                    qubit,
                    gate_name: gate_name.clone(),
                });
            }
        }

        for &clbit in &instruction.clbits {
            if clbit.0 as usize >= self.clbits.len() {
                return Err(IrError::ClbitNotFound {
                    clbit,
                    gate_name: gate_name.clone(),
                });
            }
        }
        if let Some(condition) = instruction.condition() {
            if condition.clbit.0 as usize >= self.clbits.len() {
                return Err(IrError::ClbitNotFound {
                    clbit: condition.clbit,
                    gate_name,
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit { qubit, gate_name });
            }
        }

        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    /// Apply phase gate.
    pub fn p(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(StandardGate::P(theta), qubit))
    }

    /// Apply Pauli-X conditioned on a classical bit reading 1.
    pub fn x_if(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::conditioned_gate(
            StandardGate::X,
            qubit,
            ClassicalCondition::is_set(clbit),
        ))
    }

    /// Apply Pauli-Z conditioned on a classical bit reading 1.
    pub fn z_if(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::conditioned_gate(
            StandardGate::Z,
            qubit,
            ClassicalCondition::is_set(clbit),
        ))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::CZ, control, target))
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            StandardGate::CP(theta),
            control,
            target,
        ))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Apply a custom or conditioned gate.
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::gate(gate, qubits))
    }

    /// Measure a qubit into a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: ClbitId) -> IrResult<&mut Self> {
        self.apply(Instruction::measure(qubit, clbit))
    }

    /// Reset a qubit to |0⟩.
    pub fn reset(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::reset(qubit))
    }

    /// Apply a barrier to specified qubits.
    pub fn barrier(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.apply(Instruction::barrier(qubits))
    }

    /// Apply a barrier to all qubits.
    pub fn barrier_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = self.qubits.iter().map(|q| q.id).collect();
        self.apply(Instruction::barrier(qubits))
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Insert another sequence into this one at the given handles.
    ///
    /// The i-th qubit of `other` is remapped onto `qubits[i]`, and the
    /// i-th classical bit onto `clbits[i]`; both lists must match
    /// `other`'s width exactly. Instructions (including condition bits)
    /// are remapped and appended in their original order.
    pub fn compose(
        &mut self,
        other: &Circuit,
        qubits: &[QubitId],
        clbits: &[ClbitId],
    ) -> IrResult<&mut Self> {
        if qubits.len() != other.num_qubits() {
            return Err(IrError::CompositionMismatch {
                kind: "qubit",
                expected: other.num_qubits(),
                got: qubits.len(),
            });
        }
        if clbits.len() != other.num_clbits() {
            return Err(IrError::CompositionMismatch {
                kind: "clbit",
                expected: other.num_clbits(),
                got: clbits.len(),
            });
        }

        let qubit_map: FxHashMap<QubitId, QubitId> = other
            .qubits
            .iter()
            .map(|q| q.id)
            .zip(qubits.iter().copied())
            .collect();
        let clbit_map: FxHashMap<ClbitId, ClbitId> = other
            .clbits
            .iter()
            .map(|c| c.id)
            .zip(clbits.iter().copied())
            .collect();

        for instruction in &other.instructions {
            let mut mapped = instruction.clone();
            for qubit in &mut mapped.qubits {
                *qubit = lookup_qubit(&qubit_map, *qubit, instruction)?;
            }
            for clbit in &mut mapped.clbits {
                *clbit = lookup_clbit(&clbit_map, *clbit, instruction)?;
            }
            if let InstructionKind::Gate(gate) = &mut mapped.kind {
                if let Some(condition) = &mut gate.condition {
                    condition.clbit = lookup_clbit(&clbit_map, condition.clbit, instruction)?;
                }
            }
            self.apply(mapped)?;
        }
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Get the classical bits in the circuit.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    /// Get the emitted instructions, in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the number of instructions.
    pub fn num_instructions(&self) -> usize {
        self.instructions.len()
    }

    /// Get the circuit depth.
    ///
    /// Computed from per-wire levels. Barriers synchronize the levels of
    /// the wires they span but do not deepen the circuit; conditioned
    /// gates depend on their condition bit's wire in addition to their
    /// qubits.
    pub fn depth(&self) -> usize {
        let mut qubit_level: FxHashMap<QubitId, usize> = FxHashMap::default();
        let mut clbit_level: FxHashMap<ClbitId, usize> = FxHashMap::default();
        let mut depth = 0;

        for instruction in &self.instructions {
            let qubit_front = instruction
                .qubits
                .iter()
                .filter_map(|q| qubit_level.get(q).copied())
                .max()
                .unwrap_or(0);
            let clbit_front = instruction
                .clbits
                .iter()
                .chain(instruction.condition().map(|c| &c.clbit))
                .filter_map(|c| clbit_level.get(c).copied())
                .max()
                .unwrap_or(0);
            let front = qubit_front.max(clbit_front);

            let level = if instruction.is_barrier() { front } else { front + 1 };
            for &qubit in &instruction.qubits {
                qubit_level.insert(qubit, level);
            }
            for &clbit in &instruction.clbits {
                clbit_level.insert(clbit, level);
            }
            if let Some(condition) = instruction.condition() {
                clbit_level.insert(condition.clbit, level);
            }
            depth = depth.max(level);
        }
        depth
    }

    /// Check the causal-ordering invariant for conditioned gates.
    ///
    /// Returns `true` iff every conditioned instruction is preceded, in
    /// sequence order, by a measurement writing its condition bit.
    pub fn conditions_follow_measurements(&self) -> bool {
        let mut written: FxHashSet<ClbitId> = FxHashSet::default();
        for instruction in &self.instructions {
            if let Some(condition) = instruction.condition() {
                if !written.contains(&condition.clbit) {
                    return false;
                }
            }
            if instruction.is_measure() {
                written.extend(instruction.clbits.iter().copied());
            }
        }
        true
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a GHZ ("cat") state circuit: H on the first qubit, then a
    /// CNOT chain, then measure everything.
    pub fn ghz(n: u32) -> IrResult<Self> {
        if n == 0 {
            return Ok(Self::new("ghz_0"));
        }

        let mut circuit = Self::with_size("ghz", n, n);

        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.measure(QubitId(i), ClbitId(i))?;
        }

        Ok(circuit)
    }
}

fn lookup_qubit(
    map: &FxHashMap<QubitId, QubitId>,
    qubit: QubitId,
    instruction: &Instruction,
) -> IrResult<QubitId> {
    map.get(&qubit).copied().ok_or_else(|| IrError::QubitNotFound {
        qubit,
        gate_name: Some(instruction.name().to_string()),
    })
}

fn lookup_clbit(
    map: &FxHashMap<ClbitId, ClbitId>,
    clbit: ClbitId,
    instruction: &Instruction,
) -> IrResult<ClbitId> {
    map.get(&clbit).copied().ok_or_else(|| IrError::ClbitNotFound {
        clbit,
        gate_name: Some(instruction.name().to_string()),
    })
}
