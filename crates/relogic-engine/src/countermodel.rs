//! Countermodel search.
//!
//! Valuations of the argument's atoms are enumerated in binary order and grouped
//! into candidate models of 2, 3, ... worlds. A candidate is a countermodel when
//! one of its worlds satisfies every premise and falsifies the conclusion.
//!
//! Evaluation is world-local and classical except for implication, which uses a
//! stand-in ternary relation: R(a, b, c) holds when the three worlds carry the
//! same valuation and it makes at least one atom true. The search is exhaustive
//! within its bounds and deterministic. Finding nothing does not make an argument
//! valid.

use indexmap::{IndexMap, IndexSet};
use relogic_ir::{Argument, Formula, FormulaKind};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::config::CountermodelConfig;
use crate::semantics::{Model, World, WorldId};
use crate::systems::FrameConditions;

/// A model with a world where every premise holds and the conclusion fails.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Countermodel {
    pub model: Model,
    /// The falsifying world
    pub world: WorldId,
    pub premises: Vec<String>,
    pub premise_values: Vec<bool>,
    pub conclusion: String,
    pub conclusion_value: bool,
}

impl Countermodel {
    /// Assignment of the falsifying world.
    pub fn assignment(&self) -> IndexMap<String, bool> {
        self.model
            .world(self.world)
            .map(|w| w.assignment.clone())
            .unwrap_or_default()
    }

    pub fn explain(&self) -> String {
        let mut lines = vec![format!(
            "Countermodel: world w{} of {} falsifies the argument",
            self.world,
            self.model.world_count()
        )];
        for (i, (premise, value)) in self.premises.iter().zip(&self.premise_values).enumerate() {
            lines.push(format!("  P{}: {} is {}", i + 1, premise, value));
        }
        lines.push(format!(
            "  Conclusion: {} is {}",
            self.conclusion, self.conclusion_value
        ));
        let assignment: Vec<String> = self
            .assignment()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        lines.push(format!("  Assignment: {}", assignment.join(", ")));
        lines.join("\n")
    }
}

#[derive(Debug, Clone, Default)]
pub struct CountermodelGenerator {
    config: CountermodelConfig,
}

impl CountermodelGenerator {
    pub fn new(config: CountermodelConfig) -> Self {
        CountermodelGenerator { config }
    }

    pub fn find_countermodel(&self, argument: &Argument) -> Option<Countermodel> {
        let span = info_span!("countermodel_search", premises = argument.premises.len());
        let _enter = span.enter();

        let atoms: Vec<String> = argument.atom_keys().into_iter().collect();
        let space = 1usize.checked_shl(atoms.len() as u32).unwrap_or(usize::MAX);
        let limit = space.min(self.config.max_valuations);
        let valuations: Vec<Vec<bool>> = (0..limit)
            .map(|bits| {
                (0..atoms.len())
                    .map(|j| bits.checked_shr(j as u32).is_some_and(|b| b & 1 == 1))
                    .collect()
            })
            .collect();
        let max_worlds = self.config.max_worlds.min(space);

        for n in 2..=max_worlds {
            for window in valuations.windows(n) {
                let Some(model) = local_model(&atoms, window) else {
                    continue;
                };
                let falsifying = model.world_ids().find(|&w| {
                    argument.premises.iter().all(|p| holds_locally(p, w, &model))
                        && !holds_locally(&argument.conclusion, w, &model)
                });
                if let Some(world) = falsifying {
                    debug!(worlds = n, world, "countermodel found");
                    return Some(countermodel(model, world, &argument.premises, &argument.conclusion));
                }
            }
        }
        debug!(atoms = atoms.len(), valuations = limit, "no countermodel within bounds");
        None
    }

    /// Single-world counterexample for a premise and conclusion that share no
    /// variables and no predicates: the premise's symbols are true and the
    /// conclusion's false.
    pub fn generate_simple_counterexample(
        &self,
        premise: &Formula,
        conclusion: &Formula,
    ) -> Option<Countermodel> {
        if premise.shares_variable_with(conclusion) || premise.shares_predicate_with(conclusion) {
            return None;
        }
        let mut world = World::new(0);
        for symbol in premise.predicates().iter().chain(premise.variables()) {
            world = world.with(symbol.clone(), true);
        }
        for symbol in conclusion.predicates().iter().chain(conclusion.variables()) {
            world = world.with(symbol.clone(), false);
        }
        let relation = stand_in_relation(std::slice::from_ref(&world));
        let model = Model::new(vec![world], relation, 0, vec![0], FrameConditions::default()).ok()?;
        let candidate = countermodel(model, 0, std::slice::from_ref(premise), conclusion);
        // Negated or implicational premises can fail at the built world.
        (candidate.premise_values.iter().all(|v| *v) && !candidate.conclusion_value)
            .then_some(candidate)
    }
}

fn local_model(atoms: &[String], valuations: &[Vec<bool>]) -> Option<Model> {
    let worlds: Vec<World> = valuations
        .iter()
        .enumerate()
        .map(|(id, values)| {
            atoms
                .iter()
                .zip(values)
                .fold(World::new(id), |w, (atom, value)| w.with(atom.clone(), *value))
        })
        .collect();
    let relation = stand_in_relation(&worlds);
    let star = (0..worlds.len()).collect();
    Model::new(worlds, relation, 0, star, FrameConditions::default()).ok()
}

fn stand_in_relation(worlds: &[World]) -> IndexSet<(WorldId, WorldId, WorldId)> {
    let mut relation = IndexSet::new();
    for a in worlds {
        if a.true_keys().next().is_none() {
            continue;
        }
        for b in worlds.iter().filter(|b| b.assignment == a.assignment) {
            for c in worlds.iter().filter(|c| c.assignment == a.assignment) {
                relation.insert((a.id, b.id, c.id));
            }
        }
    }
    relation
}

fn holds_locally(formula: &Formula, world: WorldId, model: &Model) -> bool {
    let at = |f: &Formula| holds_locally(f, world, model);
    match formula.kind() {
        FormulaKind::Atomic { .. } => model
            .world(world)
            .map(|w| w.atom_value(formula))
            .unwrap_or(false),
        FormulaKind::Not(inner) => !at(inner),
        FormulaKind::And(l, r) | FormulaKind::Times(l, r) => at(l) && at(r),
        FormulaKind::Or(l, r) | FormulaKind::Par(l, r) => at(l) || at(r),
        FormulaKind::Implies(a, c) | FormulaKind::Lollipop(a, c) => {
            implication_holds(a, c, world, model)
        }
        FormulaKind::Iff(l, r) => {
            implication_holds(l, r, world, model) && implication_holds(r, l, world, model)
        }
        FormulaKind::One => true,
        FormulaKind::Bottom => false,
        FormulaKind::Quantified { body, .. } => at(body),
    }
}

fn implication_holds(antecedent: &Formula, consequent: &Formula, world: WorldId, model: &Model) -> bool {
    model
        .relation()
        .iter()
        .filter(|(a, _, _)| *a == world)
        .all(|&(_, b, c)| !holds_locally(antecedent, b, model) || holds_locally(consequent, c, model))
}

fn countermodel(model: Model, world: WorldId, premises: &[Formula], conclusion: &Formula) -> Countermodel {
    Countermodel {
        premises: premises.iter().map(|p| p.canonical().to_string()).collect(),
        premise_values: premises
            .iter()
            .map(|p| holds_locally(p, world, &model))
            .collect(),
        conclusion: conclusion.canonical().to_string(),
        conclusion_value: holds_locally(conclusion, world, &model),
        model,
        world,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relogic_ir::{FormulaArena, Term};

    #[test]
    fn test_finds_countermodel_for_affirming_the_consequent() {
        let arena = FormulaArena::new();
        let x = || vec![Term::var("x")];
        let bird = arena.atom("bird", x());
        let fly = arena.atom("fly", x());
        let argument = Argument::new(vec![fly.clone(), arena.implies(bird.clone(), fly)], bird);

        let cm = CountermodelGenerator::default()
            .find_countermodel(&argument)
            .unwrap();
        assert_eq!(cm.premise_values, vec![true, true]);
        assert!(!cm.conclusion_value);
        assert_eq!(cm.assignment().get("fly(x)"), Some(&true));
        assert_eq!(cm.assignment().get("bird(x)"), Some(&false));
    }

    #[test]
    fn test_modus_ponens_has_no_countermodel() {
        let arena = FormulaArena::new();
        let x = || vec![Term::var("x")];
        let bird = arena.atom("bird", x());
        let fly = arena.atom("fly", x());
        let argument = Argument::new(vec![bird.clone(), arena.implies(bird, fly.clone())], fly);

        assert!(CountermodelGenerator::default()
            .find_countermodel(&argument)
            .is_none());
    }

    #[test]
    fn test_search_is_deterministic() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let q = arena.prop("Q");
        let argument = Argument::new(vec![arena.or(p.clone(), q.clone())], p);
        let generator = CountermodelGenerator::default();

        let first = generator.find_countermodel(&argument).unwrap();
        let second = generator.find_countermodel(&argument).unwrap();
        assert_eq!(first.world, second.world);
        assert_eq!(first.assignment(), second.assignment());
        assert_eq!(first.explain(), second.explain());
    }

    #[test]
    fn test_simple_counterexample() {
        let arena = FormulaArena::new();
        let premise = arena.atom("P", vec![Term::constant("a")]);
        let conclusion = arena.atom("R", vec![Term::constant("c")]);

        let cm = CountermodelGenerator::default()
            .generate_simple_counterexample(&premise, &conclusion)
            .unwrap();
        assert_eq!(cm.model.world_count(), 1);
        assert_eq!(cm.assignment().get("P"), Some(&true));
        assert_eq!(cm.assignment().get("R"), Some(&false));
        assert_eq!(cm.premise_values, vec![true]);
        assert!(!cm.conclusion_value);
        assert!(cm.explain().contains("Assignment: P=true, R=false"));
    }

    #[test]
    fn test_simple_counterexample_refuses_shared_symbols() {
        let arena = FormulaArena::new();
        let premise = arena.atom("P", vec![Term::var("x")]);
        let conclusion = arena.atom("Q", vec![Term::var("x")]);
        assert!(CountermodelGenerator::default()
            .generate_simple_counterexample(&premise, &conclusion)
            .is_none());
    }

    #[test]
    fn test_contradictory_premises_have_no_local_countermodel() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let q = arena.prop("Q");
        let ex_falso = Argument::new(vec![arena.and(p.clone(), arena.not(p))], q);
        assert!(CountermodelGenerator::default()
            .find_countermodel(&ex_falso)
            .is_none());
    }

    #[test]
    fn test_negated_premise_is_not_a_simple_counterexample() {
        let arena = FormulaArena::new();
        let premise = arena.not(arena.atom("P", vec![Term::constant("a")]));
        let conclusion = arena.atom("R", vec![Term::constant("c")]);
        assert!(CountermodelGenerator::default()
            .generate_simple_counterexample(&premise, &conclusion)
            .is_none());
    }

    #[test]
    fn test_more_atoms_than_valuation_bits() {
        let arena = FormulaArena::new();
        let premise = (1..70)
            .map(|i| arena.atom("P", vec![Term::constant(format!("c{}", i))]))
            .fold(arena.atom("P", vec![Term::constant("c0")]), |acc, atom| arena.and(acc, atom));
        let argument = Argument::new(vec![premise], arena.atom("Q", vec![Term::constant("d")]));

        assert_eq!(argument.atom_keys().len(), 71);
        // Only the low bits of each valuation vary, so the big conjunction never holds.
        assert!(CountermodelGenerator::default()
            .find_countermodel(&argument)
            .is_none());
    }
}
