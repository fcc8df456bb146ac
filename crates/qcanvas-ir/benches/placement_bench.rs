//! Benchmarks for slot resolution
//!
//! Run with: cargo bench -p qcanvas-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qcanvas_ir::{CircuitModel, GateId, PlacementEngine, Position, mutation};

/// Build a square circuit with every other slot taken.
fn checkerboard(size: usize) -> CircuitModel {
    let mut circuit = CircuitModel::with_size(size, size);
    for layer in 0..size {
        for register in (layer % 2..size).step_by(2) {
            let id = GateId::new(format!("gate-{layer}-{register}"));
            mutation::add_gate(&mut circuit, id, "X", layer, register).unwrap();
        }
    }
    circuit
}

/// Benchmark snapping against circuits of growing size
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_index");
    let engine = PlacementEngine::default();

    for size in &[4, 16, 64] {
        let circuit = checkerboard(*size);
        let query = Position::new(241.0, 121.0);
        group.bench_with_input(BenchmarkId::new("checkerboard", size), &circuit, |b, c| {
            b.iter(|| engine.resolve_index(black_box(c), black_box(query)));
        });
    }

    group.finish();
}

/// Benchmark gate moves back and forth between two free slots
fn bench_move(c: &mut Criterion) {
    c.bench_function("move_gate", |b| {
        let mut circuit = CircuitModel::with_size(4, 4);
        let engine = PlacementEngine::default();
        let id = GateId::new("gate-0");
        mutation::add_gate(&mut circuit, id.clone(), "H", 0, 0).unwrap();
        let targets = [Position::new(240.0, 0.0), Position::new(120.0, 0.0)];
        let mut i = 0;
        b.iter(|| {
            let to = targets[i % 2];
            i += 1;
            mutation::move_gate(&mut circuit, &engine, black_box(&id), black_box(to)).unwrap()
        });
    });
}

criterion_group!(benches, bench_resolve, bench_move);
criterion_main!(benches);
