//! Performance benchmarks for formula construction and structural queries
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use relogic_ir::{Formula, FormulaArena, Term};

fn chain(arena: &FormulaArena, length: usize) -> Formula {
    let mut formula = arena.atom("P0", vec![Term::var("x")]);
    for i in 1..length {
        let next = arena.atom(format!("P{}", i), vec![Term::var("x")]);
        formula = arena.implies(formula, next);
    }
    formula
}

// ===== Construction Benchmarks =====

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("formula_construction");

    group.bench_function("simple_atom", |b| {
        let arena = FormulaArena::new();
        b.iter(|| arena.atom(black_box("bird"), vec![Term::var(black_box("x"))]));
    });

    group.bench_function("quantified_implication", |b| {
        let arena = FormulaArena::new();
        b.iter(|| {
            let bird = arena.atom("bird", vec![Term::var("x")]);
            let fly = arena.atom("fly", vec![Term::var("x")]);
            arena.forall(black_box("x"), arena.implies(bird, fly))
        });
    });

    for length in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::new("implication_chain", length), &length, |b, &n| {
            let arena = FormulaArena::new();
            b.iter(|| chain(&arena, black_box(n)));
        });
    }

    group.finish();
}

// ===== Query Benchmarks =====

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("formula_queries");
    let arena = FormulaArena::new();
    let long = chain(&arena, 64);
    let other = chain(&arena, 32);

    group.bench_function("atoms", |b| b.iter(|| black_box(&long).atoms().len()));
    group.bench_function("canonical_equality", |b| {
        b.iter(|| black_box(&long) == black_box(&other))
    });
    group.bench_function("shares_content", |b| {
        b.iter(|| black_box(&long).shares_content_with(black_box(&other)))
    });
    group.bench_function("to_tree", |b| b.iter(|| black_box(&long).to_tree()));

    group.finish();
}

criterion_group!(benches, bench_construction, bench_queries);
criterion_main!(benches);
