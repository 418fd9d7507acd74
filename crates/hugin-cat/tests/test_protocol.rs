//! Tests for the entangle/operate/disentangle protocol composition.

use std::f64::consts::PI;

use hugin_cat::{CatError, CatProtocol};
use hugin_ir::{Circuit, ClbitId, QubitId};

// ---------------------------------------------------------------------------
// Round-trip composition
// ---------------------------------------------------------------------------

#[test]
fn immediate_roundtrip_composes_cleanly() {
    // Entangler immediately followed by disentangler, nothing in between.
    let n = 5_u32;
    let mut circuit = Circuit::with_size("roundtrip", n, 1 + (n - 2));
    let qubits: Vec<_> = (0..n).map(QubitId).collect();
    let dis_clbits: Vec<_> = (1..n - 1).map(ClbitId).collect();

    let mut round = CatProtocol::new(n);
    round
        .apply(&mut circuit, &qubits, ClbitId(0), &dis_clbits, |_| Ok(()))
        .unwrap();

    // Entangler contributes 2n instructions, disentangler 4n - 7.
    assert_eq!(circuit.num_instructions(), (2 * n + 4 * n - 7) as usize);
    assert!(circuit.conditions_follow_measurements());

    // Qubit 1 is measured by the entangler; each spread qubit is
    // measured back out by the disentangler.
    let measured: Vec<_> = circuit
        .instructions()
        .iter()
        .filter(|i| i.is_measure())
        .map(|i| i.qubits[0])
        .collect();
    let mut expected = vec![QubitId(1)];
    expected.extend((2..n).map(QubitId));
    assert_eq!(measured, expected);
}

#[test]
fn distributed_phase_circuit_matches_reference_shape() {
    // Two 2-qubit hosts sharing a controlled phase: the control lives on
    // host 1, the phase target on host 2.
    let mut circuit = Circuit::new("distributed");
    let host1 = circuit.add_qreg("host1", 2);
    let host2 = circuit.add_qreg("host2", 2);
    let cl_eval = circuit.add_creg("cl_eval", 1);
    let cl_aux = circuit.add_creg("cl_aux", 2);

    circuit.x(host2[1]).unwrap();
    circuit.h(host1[0]).unwrap();

    let mut round = CatProtocol::new(3);
    round
        .apply(
            &mut circuit,
            &[host1[0], host1[1], host2[0]],
            cl_aux[0],
            &[cl_aux[1]],
            |qc| qc.cp(2.0 * PI * 0.25, host2[0], host2[1]).map(|_| ()),
        )
        .unwrap();

    circuit.barrier_all().unwrap();
    circuit.p(-PI / 2.0, host1[0]).unwrap();
    circuit.h(host1[0]).unwrap();
    circuit.measure(host1[0], cl_eval[0]).unwrap();

    // X + H, entangler (6), CP, disentangler (5), fence + P + H + measure.
    assert_eq!(circuit.num_instructions(), 2 + 6 + 1 + 5 + 4);
    assert!(circuit.conditions_follow_measurements());

    // The entangler's correction is conditioned on cl_aux[0], the
    // disentangler's on cl_aux[1].
    let conditions: Vec<_> = circuit
        .instructions()
        .iter()
        .filter_map(|i| i.condition())
        .map(|c| c.clbit)
        .collect();
    assert_eq!(conditions, vec![cl_aux[0], cl_aux[1], cl_aux[1]]);

    // The distributed control lands on host2[0] before the CP consumes it.
    let cp = circuit
        .instructions()
        .iter()
        .find(|i| i.name() == "cp")
        .unwrap();
    assert_eq!(cp.qubits, vec![host2[0], host2[1]]);
}

#[test]
fn evaluation_sweep_composes_one_round_per_eval_qubit() {
    // One protocol round per evaluation qubit, each on its own ancilla
    // pair, all controlling phase rotations on a shared state qubit.
    let n_eval = 3_u32;
    let phase = 0.125;

    let mut circuit = Circuit::new("qpe_round_sweep");
    let qr_eval = circuit.add_qreg("eval", n_eval);
    let qr_aux = circuit.add_qreg("aux", 2 * n_eval);
    let qr_state = circuit.add_qreg("q", 1);
    let _cl_eval = circuit.add_creg("cl_eval", n_eval);
    let cl_aux = circuit.add_creg("cl_aux", 2 * n_eval);

    circuit.x(qr_state[0]).unwrap();
    for &q in &qr_eval {
        circuit.h(q).unwrap();
    }

    for j in 0..n_eval as usize {
        let qubits = [qr_eval[j], qr_aux[2 * j], qr_aux[2 * j + 1]];
        let power = 1_u32 << (n_eval as usize - j - 1);
        let theta = 2.0 * PI * phase * f64::from(power);

        let mut round = CatProtocol::new(3);
        round
            .apply(
                &mut circuit,
                &qubits,
                cl_aux[2 * j],
                &[cl_aux[2 * j + 1]],
                |qc| qc.cp(theta, qr_aux[2 * j + 1], qr_state[0]).map(|_| ()),
            )
            .unwrap();
    }

    // Prelude (1 + n_eval) plus one round (6 + 1 + 5) per eval qubit.
    assert_eq!(
        circuit.num_instructions(),
        (1 + n_eval + n_eval * 12) as usize
    );
    assert!(circuit.conditions_follow_measurements());

    // Every aux pair's classical bits are used by exactly one round.
    let conditions: Vec<_> = circuit
        .instructions()
        .iter()
        .filter_map(|i| i.condition())
        .map(|c| c.clbit)
        .collect();
    assert_eq!(
        conditions,
        vec![
            cl_aux[0], cl_aux[1], cl_aux[1],
            cl_aux[2], cl_aux[3], cl_aux[3],
            cl_aux[4], cl_aux[5], cl_aux[5],
        ]
    );
}

#[test]
fn wrapped_operation_may_be_a_custom_gate() {
    use hugin_ir::{CustomGate, Gate};

    let n = 4_u32;
    let mut circuit = Circuit::with_size("custom", n + 1, n - 1);
    let qubits: Vec<_> = (0..n).map(QubitId).collect();
    let dis_clbits: Vec<_> = (1..n - 1).map(ClbitId).collect();

    let mut round = CatProtocol::new(n);
    round
        .apply(&mut circuit, &qubits, ClbitId(0), &dis_clbits, |qc| {
            // Distributed control on qubit n-1 drives a caller-defined
            // two-qubit operation onto the extra work qubit.
            let cu = Gate::custom(CustomGate::new("cu", 2)).with_label("remote_op");
            qc.gate(cu, [QubitId(n - 1), QubitId(n)]).map(|_| ())
        })
        .unwrap();

    let custom = circuit
        .instructions()
        .iter()
        .find(|i| i.name() == "cu")
        .unwrap();
    assert_eq!(custom.qubits, vec![QubitId(n - 1), QubitId(n)]);
    assert_eq!(custom.as_gate().unwrap().label.as_deref(), Some("remote_op"));
}

// ---------------------------------------------------------------------------
// Wiring validation
// ---------------------------------------------------------------------------

#[test]
fn qubit_list_width_is_enforced() {
    let mut round = CatProtocol::new(4);
    let mut circuit = Circuit::with_size("test", 4, 3);
    let err = round
        .apply(
            &mut circuit,
            &[QubitId(0), QubitId(1), QubitId(2)],
            ClbitId(0),
            &[ClbitId(1), ClbitId(2)],
            |_| Ok(()),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        CatError::QubitCountMismatch {
            expected: 4,
            got: 3,
            ..
        }
    ));
}

#[test]
fn disentangle_clbit_width_is_enforced() {
    let mut round = CatProtocol::new(4);
    let mut circuit = Circuit::with_size("test", 4, 3);
    let qubits: Vec<_> = (0..4).map(QubitId).collect();
    let err = round
        .apply(&mut circuit, &qubits, ClbitId(0), &[ClbitId(1)], |_| Ok(()))
        .unwrap_err();
    assert!(matches!(
        err,
        CatError::ClbitCountMismatch {
            expected: 2,
            got: 1,
            ..
        }
    ));
    // The failed round composed nothing.
    assert_eq!(circuit.num_instructions(), 0);
}

#[test]
fn unknown_handles_surface_as_ir_errors() {
    let mut round = CatProtocol::new(3);
    // Circuit too small for the requested handles.
    let mut circuit = Circuit::with_size("test", 2, 2);
    let err = round
        .apply(
            &mut circuit,
            &[QubitId(0), QubitId(1), QubitId(2)],
            ClbitId(0),
            &[ClbitId(1)],
            |_| Ok(()),
        )
        .unwrap_err();
    assert!(matches!(err, CatError::Ir(_)));
}
