//! End-to-end behavior of the public engine API on the reference arguments.

use approx::assert_relative_eq;
use relogic_engine::{
    hierarchy, is_system_stronger, validate, CountermodelGenerator, EngineConfig, ProofEngine,
    ProofLogic, RelevanceValidator, SystemKind,
};
use relogic_ir::{Argument, FormulaArena, ParsedArgument, Term};

fn c(name: &str) -> Vec<Term> {
    vec![Term::constant(name)]
}

fn x() -> Vec<Term> {
    vec![Term::var("x")]
}

#[test]
fn test_identical_premise_is_circular() {
    let arena = FormulaArena::new();
    let result = validate(
        &[arena.atom("mammal", c("dolphin"))],
        &arena.atom("mammal", c("dolphin")),
    );

    assert!(!result.is_valid);
    assert_eq!(
        result.violated_constraints,
        vec!["CIRCULAR REASONING: Premise 1 is identical to conclusion - indicates missing explicit premises"]
    );
}

#[test]
fn test_missing_bridge_is_disconnected() {
    let arena = FormulaArena::new();
    let result = validate(&[arena.atom("bird", x())], &arena.atom("fly", x()));

    assert!(!result.is_valid);
    assert_eq!(
        result.violated_constraints,
        vec!["DISCONNECTED: 1 premise(s) not connected to conclusion - remove premises: P1"]
    );
}

#[test]
fn test_bridged_argument_is_valid() {
    let arena = FormulaArena::new();
    let bird = arena.atom("bird", x());
    let fly = arena.atom("fly", x());
    let result = validate(&[bird.clone(), arena.implies(bird, fly.clone())], &fly);

    assert!(result.is_valid);
    assert!(result.violated_constraints.is_empty());
}

#[test]
fn test_unrelated_premises_all_named() {
    let arena = FormulaArena::new();
    let result = validate(
        &[arena.atom("P", c("a")), arena.atom("Q", c("b"))],
        &arena.atom("R", c("c")),
    );

    assert!(!result.is_valid);
    assert_eq!(result.violated_constraints.len(), 1);
    assert!(result.violated_constraints[0].ends_with("remove premises: P1, P2"));
}

#[test]
fn test_identity_is_by_canonical_string() {
    let first = FormulaArena::new();
    let second = FormulaArena::new();
    second.prop("padding");

    let a = first.atom("mammal", c("dolphin"));
    let b = second.atom("mammal", c("dolphin"));
    assert_ne!(a.id(), b.id());

    let result = validate(&[a], &b);
    assert!(result.violated_constraints[0].starts_with("CIRCULAR REASONING: Premise 1 is identical"));
}

#[test]
fn test_system_ordering() {
    assert!(is_system_stronger(SystemKind::R, SystemKind::B));
    assert_eq!(
        hierarchy(),
        vec![SystemKind::B, SystemKind::T, SystemKind::E, SystemKind::R]
    );
}

#[test]
fn test_zero_relevance_rejected_in_every_system() {
    let arena = FormulaArena::new();
    let unrelated = Argument::new(
        vec![arena.atom("P", c("a")), arena.atom("Q", c("b"))],
        arena.atom("R", c("c")),
    );
    let engine = ProofEngine::default();

    for kind in hierarchy() {
        let result = engine.validate_argument(&arena, &unrelated, ProofLogic::Relevance(kind));
        assert_relative_eq!(result.relevance_score, 0.0);
        assert!(!result.has_relevance);
        assert!(!result.is_valid);
    }
}

#[test]
fn test_simple_counterexample_single_world() {
    let arena = FormulaArena::new();
    let premise = arena.atom("P", vec![Term::var("x")]);
    let conclusion = arena.atom("R", vec![Term::var("y")]);

    let cm = CountermodelGenerator::default()
        .generate_simple_counterexample(&premise, &conclusion)
        .unwrap();
    assert_eq!(cm.model.world_count(), 1);
    let assignment = cm.assignment();
    assert_eq!(assignment.get("P"), Some(&true));
    assert_eq!(assignment.get("x"), Some(&true));
    assert_eq!(assignment.get("R"), Some(&false));
    assert_eq!(assignment.get("y"), Some(&false));
    assert!(cm.premise_values.iter().all(|v| *v));
    assert!(!cm.conclusion_value);
}

#[test]
fn test_validator_system_parameter() {
    let arena = FormulaArena::new();
    let a = arena.prop("A");
    let b = arena.prop("B");
    let cc = arena.prop("C");
    let premise = arena.and(a.clone(), arena.or(b.clone(), cc.clone()));
    let conclusion = arena.or(arena.and(a.clone(), b), arena.and(a, cc));

    for kind in hierarchy() {
        let result = RelevanceValidator::new(kind).validate(std::slice::from_ref(&premise), &conclusion);
        assert_eq!(result.is_valid, kind == SystemKind::R, "system {}", kind);
    }
}

#[test]
fn test_translator_output_end_to_end() {
    let json = r#"{
        "premises": [
            {
                "originalText": "Every bird flies",
                "formula": {
                    "type": "compound",
                    "operator": "forall",
                    "variable": "x",
                    "operands": [{
                        "type": "compound",
                        "operator": "implies",
                        "operands": [
                            {"type": "atomic", "predicate": "bird", "terms": [{"Var": "x"}]},
                            {"type": "atomic", "predicate": "fly", "terms": [{"Var": "x"}]}
                        ]
                    }]
                },
                "confidence": 0.9
            },
            {
                "originalText": "Polly is a bird",
                "formula": {"type": "atomic", "predicate": "bird", "terms": [{"Var": "y"}]},
                "confidence": 0.5
            }
        ],
        "conclusion": {
            "originalText": "Polly flies",
            "formula": {"type": "atomic", "predicate": "fly", "terms": [{"Var": "y"}]}
        }
    }"#;
    let parsed = ParsedArgument::from_json(json).unwrap();
    let arena = FormulaArena::new();
    let argument = parsed.to_argument(&arena).unwrap();

    let config = EngineConfig::default();
    let warnings = parsed.translation_warnings(config.relevance.min_translation_confidence);
    assert_eq!(warnings.len(), 1);

    let result = validate(&argument.premises, &argument.conclusion);
    assert!(!result.is_valid);
    assert!(result.violated_constraints[0].starts_with("QUANTIFIER SCOPE: Premise 1 binds ∀x"));

    let proof = ProofEngine::new(config)
        .find_proof(
            &arena,
            &argument.premises,
            &argument.conclusion,
            ProofLogic::Relevance(SystemKind::R),
        )
        .unwrap();
    assert!(proof.is_some());
}
