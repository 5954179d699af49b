use relogic::engine::RelevanceValidator;
use relogic::{validate, Argument, FormulaArena, ProofEngine, ProofLogic, SystemKind, Term};

fn main() {
    println!("=== Relogic Example: Modus Ponens ===\n");

    // bird(x), bird(x) → fly(x) ⊢ fly(x)
    let arena = FormulaArena::new();
    let bird = arena.atom("bird", vec![Term::var("x")]);
    let fly = arena.atom("fly", vec![Term::var("x")]);
    let rule = arena.implies(bird.clone(), fly.clone());

    let bare = validate(std::slice::from_ref(&bird), &fly);
    println!("Without the bridging premise: {}", bird);
    for tag in &bare.violated_constraints {
        println!("  {}", tag);
    }

    let argument = Argument::new(vec![bird, rule], fly);
    println!("\nWith the bridging premise: {}", argument);

    for kind in SystemKind::HIERARCHY {
        let result = RelevanceValidator::new(kind).validate(&argument.premises, &argument.conclusion);
        println!("  validator in {}: valid = {}", kind, result.is_valid);
    }

    let verdict = ProofEngine::default().validate_argument(
        &arena,
        &argument,
        ProofLogic::Relevance(SystemKind::R),
    );
    println!(
        "\nProof engine (R): valid = {}, relevance = {:.2}",
        verdict.is_valid, verdict.relevance_score
    );
    match &verdict.proof {
        Some(proof) => print!("{}", proof),
        None => println!("  no proof: {:?}", verdict.errors),
    }

    println!("\n=== Done ===");
}
