//! Performance benchmarks for validation, proof search and countermodel search
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use relogic_engine::{
    validate, CountermodelGenerator, ProofEngine, ProofLogic, RelevanceModelBuilder, SystemKind,
};
use relogic_ir::{Argument, Formula, FormulaArena, Term};

/// P0(x), P0(x) → P1(x), ..., P(n-2)(x) → P(n-1)(x)
fn chain_premises(arena: &FormulaArena, length: usize) -> (Vec<Formula>, Formula) {
    let atom = |i: usize| arena.atom(format!("P{}", i), vec![Term::var("x")]);
    let mut premises = vec![atom(0)];
    for i in 1..length {
        premises.push(arena.implies(atom(i - 1), atom(i)));
    }
    (premises, atom(length - 1))
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");
    let arena = FormulaArena::new();

    for length in [4, 16, 64] {
        let (premises, conclusion) = chain_premises(&arena, length);
        group.bench_with_input(BenchmarkId::new("chain", length), &length, |b, _| {
            b.iter(|| validate(black_box(&premises), black_box(&conclusion)))
        });
    }

    group.finish();
}

fn bench_proof_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("proof_search");
    let arena = FormulaArena::new();
    let engine = ProofEngine::default();

    for length in [2, 4, 8] {
        let (premises, goal) = chain_premises(&arena, length);
        group.bench_with_input(BenchmarkId::new("modus_ponens_chain", length), &length, |b, _| {
            b.iter(|| {
                engine.find_proof(
                    &arena,
                    black_box(&premises),
                    black_box(&goal),
                    ProofLogic::Relevance(SystemKind::R),
                )
            })
        });
    }

    let (premises, goal) = chain_premises(&arena, 4);
    let argument = Argument::new(premises, goal);
    group.bench_function("validate_argument", |b| {
        b.iter(|| engine.validate_argument(&arena, black_box(&argument), ProofLogic::Relevance(SystemKind::E)))
    });

    group.finish();
}

fn bench_semantics(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantics");
    let arena = FormulaArena::new();
    let bird = arena.atom("bird", vec![Term::var("x")]);
    let fly = arena.atom("fly", vec![Term::var("x")]);

    // Affirming the consequent has a countermodel.
    let invalid = Argument::new(vec![fly.clone(), arena.implies(bird.clone(), fly)], bird);
    let generator = CountermodelGenerator::default();
    group.bench_function("find_countermodel", |b| {
        b.iter(|| generator.find_countermodel(black_box(&invalid)))
    });

    for worlds in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("build_model_r", worlds), &worlds, |b, &n| {
            let builder = RelevanceModelBuilder::new();
            b.iter(|| builder.create_model(SystemKind::R, black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validation, bench_proof_search, bench_semantics);
criterion_main!(benches);
