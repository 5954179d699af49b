//! Classical paradoxes of implication under relevance logic.
//!
//! Run with `cargo run -p relogic-engine --example paradoxes`.

use relogic_engine::{validate, ProofEngine, ProofLogic, SystemKind};
use relogic_ir::{Argument, FormulaArena, Term};

fn main() {
    let arena = FormulaArena::new();
    let x = || vec![Term::var("x")];
    let engine = ProofEngine::default();

    let rain = arena.atom("raining", vec![Term::constant("paris")]);
    let moon = arena.atom("cheese", vec![Term::constant("moon")]);
    let bird = arena.atom("bird", x());
    let fly = arena.atom("fly", x());

    let cases = vec![
        (
            "Ex falso quodlibet",
            Argument::new(vec![arena.and(rain.clone(), arena.not(rain.clone()))], moon.clone()),
        ),
        (
            "Topic drift",
            Argument::new(vec![rain.clone()], arena.or(moon.clone(), arena.not(moon))),
        ),
        (
            "Restatement",
            Argument::new(vec![arena.and(rain.clone(), bird.clone())], rain),
        ),
        (
            "Modus ponens",
            Argument::new(vec![bird.clone(), arena.implies(bird, fly.clone())], fly),
        ),
    ];

    println!("=== Paradoxes of implication ===\n");
    for (name, argument) in cases {
        println!("{}: {}", name, argument);

        let syntactic = validate(&argument.premises, &argument.conclusion);
        if syntactic.is_valid {
            println!("  validator: passes");
        }
        for tag in &syntactic.violated_constraints {
            println!("  validator: {}", tag);
        }

        for logic in [ProofLogic::Classical, ProofLogic::Relevance(SystemKind::R)] {
            let verdict = engine.validate_argument(&arena, &argument, logic);
            println!(
                "  {:<9} valid={} relevance={:.2}",
                logic.to_string(),
                verdict.is_valid,
                verdict.relevance_score
            );
            if let Some(proof) = &verdict.proof {
                print!("{}", proof);
            }
            if let Some(cm) = &verdict.counterexample {
                println!("{}", cm.explain());
            }
        }
        println!();
    }
}
