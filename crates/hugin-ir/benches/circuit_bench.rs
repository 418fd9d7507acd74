//! Benchmarks for Hugin sequence operations
//!
//! Run with: cargo bench -p hugin-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hugin_ir::{Circuit, ClbitId, QubitId};

/// Benchmark circuit creation
fn bench_circuit_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_creation");

    for num_qubits in &[2, 5, 10, 20, 50] {
        group.bench_with_input(
            BenchmarkId::new("with_size", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| Circuit::with_size(black_box("bench"), black_box(n), black_box(n)));
            },
        );
    }

    group.finish();
}

/// Benchmark adding gates to a circuit
fn bench_gate_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_addition");

    group.bench_function("h_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit.h(black_box(QubitId(0))).unwrap();
        });
    });

    group.bench_function("cx_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit
                .cx(black_box(QubitId(0)), black_box(QubitId(1)))
                .unwrap();
        });
    });

    group.bench_function("conditioned_x_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 1);
        circuit.measure(QubitId(0), ClbitId(0)).unwrap();
        b.iter(|| {
            circuit
                .x_if(black_box(QubitId(1)), black_box(ClbitId(0)))
                .unwrap();
        });
    });

    group.finish();
}

/// Benchmark GHZ state circuit creation
fn bench_ghz_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_circuit");

    for num_qubits in &[3, 5, 10, 20, 50, 100] {
        group.bench_with_input(
            BenchmarkId::new("create", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| black_box(Circuit::ghz(n).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark composing a sequence into a larger circuit
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    for num_qubits in &[3_u32, 5, 10, 20] {
        group.bench_with_input(
            BenchmarkId::new("ghz_into_double", num_qubits),
            num_qubits,
            |b, &n| {
                let inner = Circuit::ghz(n).unwrap();
                let qubits: Vec<_> = (n..2 * n).map(QubitId::from).collect();
                let clbits: Vec<_> = (0..n).map(ClbitId::from).collect();
                b.iter(|| {
                    let mut outer = Circuit::with_size("outer", 2 * n, n);
                    outer
                        .compose(black_box(&inner), black_box(&qubits), black_box(&clbits))
                        .unwrap();
                    black_box(outer)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_circuit_creation,
    bench_gate_addition,
    bench_ghz_circuit,
    bench_compose
);
criterion_main!(benches);
