use relogic::engine::{
    create_system, evaluate, FrameConditionChecker, RelevanceModelBuilder,
};
use relogic::{FormulaArena, SystemKind};

fn main() {
    println!("=== Relogic Example: Ternary Models ===\n");

    let arena = FormulaArena::new();
    let p = arena.prop("p");
    let q = arena.prop("q");
    let identity = arena.implies(p.clone(), p.clone());
    let contraction = arena.implies(p.clone(), arena.and(p.clone(), p.clone()));
    let irrelevant = arena.implies(q, arena.implies(p.clone(), p));

    let builder = RelevanceModelBuilder::new();
    let checker = FrameConditionChecker::new();

    for kind in SystemKind::HIERARCHY {
        let model = match builder.create_model(kind, 3) {
            Ok(model) => model.with_assignment(1, "p", true).with_assignment(2, "q", true),
            Err(e) => {
                eprintln!("Could not build a model for {}: {}", kind, e);
                continue;
            }
        };
        let report = checker.validate_frame_conditions(&model, create_system(kind).as_ref());

        println!(
            "{}: {} worlds, {} triples, frame conditions hold = {}",
            kind,
            model.world_count(),
            model.relation().len(),
            report.is_valid()
        );
        for formula in [&identity, &contraction, &irrelevant] {
            println!(
                "  {:<24} at the distinguished world: {}",
                formula.to_string(),
                evaluate(formula, model.distinguished(), &model)
            );
        }
    }

    println!("\n=== Done ===");
}
