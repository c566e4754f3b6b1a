//! Benchmarks for the classical-subcircuit optimizer
//!
//! Run with: cargo bench -p alsvid-opt

use alsvid_ir::Circuit;
use alsvid_opt::{optimize, segment};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// A chain of `n` cancelling CNOT pairs over `width` qubits.
fn cancelling_chain(width: usize, n: usize) -> Circuit {
    let mut circuit = Circuit::new();
    let names: Vec<String> = (0..width).map(|i| format!("q{i}")).collect();
    for name in &names {
        circuit.add_qubit(name).unwrap();
    }
    for i in 0..n {
        let c = &names[i % width];
        let t = &names[(i + 1) % width];
        circuit.cnot(c, t).unwrap();
        circuit.cnot(c, t).unwrap();
    }
    circuit
}

/// `n` swap-fold triples separated by measurement boundaries.
fn fold_chain(n: usize) -> Circuit {
    let mut circuit = Circuit::new();
    circuit.add_qubit("a").unwrap();
    circuit.add_qubit("b").unwrap();
    for _ in 0..n {
        circuit.cnot("a", "b").unwrap();
        circuit.cnot("b", "a").unwrap();
        circuit.cnot("a", "b").unwrap();
        circuit.measure("a").unwrap();
    }
    circuit
}

/// A mixed workload with nothing to cancel: all gates pass through.
fn pass_through_chain(width: usize, n: usize) -> Circuit {
    let mut circuit = Circuit::new();
    let names: Vec<String> = (0..width).map(|i| format!("q{i}")).collect();
    for name in &names {
        circuit.add_qubit(name).unwrap();
    }
    for i in 0..n {
        let a = &names[i % width];
        let b = &names[(i + 3) % width];
        let c = &names[(i + 5) % width];
        circuit.cnot(a, b).unwrap();
        circuit.tof(a, b, c).unwrap();
    }
    circuit
}

fn bench_segmentation(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation");

    for n in &[100, 1000, 10_000] {
        let circuit = fold_chain(*n);
        group.bench_with_input(BenchmarkId::new("fold_chain", n), &circuit, |b, circuit| {
            b.iter(|| black_box(segment(circuit)));
        });
    }

    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");

    for n in &[100, 1000, 10_000] {
        let circuit = cancelling_chain(8, *n);
        group.bench_with_input(
            BenchmarkId::new("cancelling_chain", n),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(optimize(circuit)));
            },
        );
    }

    for n in &[100, 1000] {
        let circuit = fold_chain(*n);
        group.bench_with_input(BenchmarkId::new("fold_chain", n), &circuit, |b, circuit| {
            b.iter(|| black_box(optimize(circuit)));
        });
    }

    for n in &[100, 1000, 10_000] {
        let circuit = pass_through_chain(8, *n);
        group.bench_with_input(
            BenchmarkId::new("pass_through", n),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(optimize(circuit)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_segmentation, bench_optimize);
criterion_main!(benches);
