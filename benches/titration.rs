//! Titration engine benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glycine_titration::chemistry::{EquilibriumSolver, TitrationCurve, DEFAULT_CURVE_SAMPLES};
use glycine_titration::state::SolutionState;

fn bench_point_ph(c: &mut Criterion) {
    let solver = EquilibriumSolver::default();
    let state = SolutionState::from_amounts(10.0, 7.5, 135.0);

    c.bench_function("point_ph", |b| b.iter(|| solver.ph(black_box(&state))));
}

fn bench_curve_generation(c: &mut Criterion) {
    let curve = TitrationCurve::new(
        EquilibriumSolver::default(),
        10.0,
        50.0,
        0.1,
        DEFAULT_CURVE_SAMPLES,
    );

    c.bench_function("curve_generation", |b| {
        b.iter(|| black_box(&curve).iter().map(|s| s.ph).sum::<f64>())
    });
}

criterion_group!(benches, bench_point_ph, bench_curve_generation);
criterion_main!(benches);
