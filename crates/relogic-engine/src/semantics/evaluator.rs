//! Truth at a world.

use relogic_ir::{Formula, FormulaKind};

use super::{Model, WorldId};

/// Evaluate `formula` at `world` in `model`.
///
/// Implication (relevant or linear) is universal over R(world, b, c); fusion ⊗ is
/// existential over R(b, c, world); par ⅋ is the De Morgan dual of ⊗; negation
/// flips the value at the star world. `1` holds exactly at the distinguished
/// world and `⊥` everywhere else. Quantified formulas evaluate their body.
pub fn evaluate(formula: &Formula, world: WorldId, model: &Model) -> bool {
    match formula.kind() {
        FormulaKind::Atomic { .. } => model
            .world(world)
            .map(|w| w.atom_value(formula))
            .unwrap_or(false),
        FormulaKind::Not(inner) => !evaluate(inner, model.star(world), model),
        FormulaKind::And(l, r) => evaluate(l, world, model) && evaluate(r, world, model),
        FormulaKind::Or(l, r) => evaluate(l, world, model) || evaluate(r, world, model),
        FormulaKind::Implies(a, c) | FormulaKind::Lollipop(a, c) => {
            relevant_implication(a, c, world, model)
        }
        FormulaKind::Iff(l, r) => {
            relevant_implication(l, r, world, model) && relevant_implication(r, l, world, model)
        }
        FormulaKind::Times(l, r) => fusion(world, model, |b| evaluate(l, b, model), |c| {
            evaluate(r, c, model)
        }),
        FormulaKind::Par(l, r) => {
            // ¬(¬l ⊗ ¬r): the inner fusion is evaluated at the star world, and each
            // negated operand at the star of its own world.
            !fusion(
                model.star(world),
                model,
                |b| !evaluate(l, model.star(b), model),
                |c| !evaluate(r, model.star(c), model),
            )
        }
        FormulaKind::One => world == model.distinguished(),
        FormulaKind::Bottom => world != model.distinguished(),
        FormulaKind::Quantified { body, .. } => evaluate(body, world, model),
    }
}

fn relevant_implication(
    antecedent: &Formula,
    consequent: &Formula,
    world: WorldId,
    model: &Model,
) -> bool {
    model
        .relation()
        .iter()
        .filter(|(a, _, _)| *a == world)
        .all(|&(_, b, c)| !evaluate(antecedent, b, model) || evaluate(consequent, c, model))
}

fn fusion(
    world: WorldId,
    model: &Model,
    left: impl Fn(WorldId) -> bool,
    right: impl Fn(WorldId) -> bool,
) -> bool {
    model
        .relation()
        .iter()
        .filter(|(_, _, c)| *c == world)
        .any(|&(b, c, _)| left(b) && right(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::{RelevanceModelBuilder, World};
    use crate::systems::{FrameConditions, SystemKind};
    use indexmap::IndexSet;
    use relogic_ir::FormulaArena;

    fn three_worlds(relation: &[(usize, usize, usize)]) -> Model {
        Model::new(
            (0..3).map(World::new).collect(),
            relation.iter().copied().collect::<IndexSet<_>>(),
            0,
            vec![0, 2, 1],
            FrameConditions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_pointwise_connectives() {
        let arena = FormulaArena::new();
        let p = arena.prop("p");
        let q = arena.prop("q");
        let model = three_worlds(&[]).with_assignment(0, "p", true);

        assert!(evaluate(&arena.or(p.clone(), q.clone()), 0, &model));
        assert!(!evaluate(&arena.and(p.clone(), q.clone()), 0, &model));
        // star(0) = 0, so negation is classical at the distinguished world.
        assert!(evaluate(&arena.not(q.clone()), 0, &model));
    }

    #[test]
    fn test_negation_uses_star_world() {
        let arena = FormulaArena::new();
        let p = arena.prop("p");
        let model = three_worlds(&[]).with_assignment(1, "p", true);

        // At world 2, ¬p looks at star(2) = 1 where p holds.
        assert!(!evaluate(&arena.not(p.clone()), 2, &model));
        assert!(evaluate(&arena.not(p), 1, &model));
    }

    #[test]
    fn test_implication_quantifies_over_relation() {
        let arena = FormulaArena::new();
        let p = arena.prop("p");
        let q = arena.prop("q");
        let imp = arena.implies(p.clone(), q.clone());

        let model = three_worlds(&[(0, 1, 2)])
            .with_assignment(1, "p", true)
            .with_assignment(2, "q", true);
        assert!(evaluate(&imp, 0, &model));

        let broken = three_worlds(&[(0, 1, 1)]).with_assignment(1, "p", true);
        assert!(!evaluate(&imp, 0, &broken));

        // Vacuous at a world with no outgoing triples.
        assert!(evaluate(&imp, 2, &broken));
        assert!(evaluate(&arena.lollipop(p, q), 2, &broken));
    }

    #[test]
    fn test_fusion_is_existential() {
        let arena = FormulaArena::new();
        let p = arena.prop("p");
        let q = arena.prop("q");
        let tensor = arena.times(p, q);

        let model = three_worlds(&[(1, 2, 0)])
            .with_assignment(1, "p", true)
            .with_assignment(2, "q", true);
        assert!(evaluate(&tensor, 0, &model));
        assert!(!evaluate(&tensor, 1, &model));
    }

    #[test]
    fn test_par_is_dual_of_fusion() {
        let arena = FormulaArena::new();
        let p = arena.prop("p");
        let q = arena.prop("q");
        let par = arena.par(p.clone(), q.clone());
        let explicit = arena.not(arena.times(arena.not(p), arena.not(q)));

        let model = RelevanceModelBuilder::new()
            .create_model(SystemKind::R, 3)
            .unwrap()
            .with_assignment(1, "p", true)
            .with_assignment(2, "q", true);
        for w in model.world_ids() {
            assert_eq!(evaluate(&par, w, &model), evaluate(&explicit, w, &model));
        }
    }

    #[test]
    fn test_units_follow_distinguished_world() {
        let arena = FormulaArena::new();
        let model = three_worlds(&[]);
        assert!(evaluate(&arena.one(), 0, &model));
        assert!(!evaluate(&arena.one(), 1, &model));
        assert!(!evaluate(&arena.bottom(), 0, &model));
        assert!(evaluate(&arena.bottom(), 2, &model));
    }
}
