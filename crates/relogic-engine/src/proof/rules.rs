//! The rule table used by proof search.

use std::fmt;

use relogic_ir::{Formula, FormulaArena};
use serde::{Deserialize, Serialize};

/// How a proof step was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    Premise,
    Axiom,
    ModusPonens,
    ConjunctionIntroduction,
    ConjunctionElimination,
    UniversalInstantiation,
    HypotheticalSyllogism,
}

impl RuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Premise => "Premise",
            RuleKind::Axiom => "Axiom",
            RuleKind::ModusPonens => "Modus Ponens",
            RuleKind::ConjunctionIntroduction => "Conjunction Introduction",
            RuleKind::ConjunctionElimination => "Conjunction Elimination",
            RuleKind::UniversalInstantiation => "Universal Instantiation",
            RuleKind::HypotheticalSyllogism => "Hypothetical Syllogism",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A formula produced by a rule, with the formulas it was produced from.
#[derive(Clone, Debug)]
pub struct Derivation {
    pub formula: Formula,
    pub inputs: Vec<Formula>,
}

impl Derivation {
    /// The output shares an atom or a variable with every input.
    pub fn is_relevant(&self) -> bool {
        self.inputs
            .iter()
            .all(|input| input.shares_content_with(&self.formula))
    }
}

pub type RuleFn = fn(&FormulaArena, &[Formula], Option<&Formula>) -> Vec<Derivation>;

#[derive(Clone, Copy)]
pub struct InferenceRule {
    pub kind: RuleKind,
    /// Derivations must pass [`Derivation::is_relevant`] under relevance logics.
    pub requires_relevance: bool,
    pub apply: RuleFn,
}

impl fmt::Debug for InferenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceRule")
            .field("kind", &self.kind)
            .field("requires_relevance", &self.requires_relevance)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<InferenceRule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable {
            rules: vec![
                InferenceRule {
                    kind: RuleKind::ModusPonens,
                    requires_relevance: true,
                    apply: modus_ponens,
                },
                InferenceRule {
                    kind: RuleKind::ConjunctionIntroduction,
                    requires_relevance: false,
                    apply: conjunction_introduction,
                },
                InferenceRule {
                    kind: RuleKind::ConjunctionElimination,
                    requires_relevance: false,
                    apply: conjunction_elimination,
                },
                InferenceRule {
                    kind: RuleKind::UniversalInstantiation,
                    requires_relevance: false,
                    apply: universal_instantiation,
                },
                InferenceRule {
                    kind: RuleKind::HypotheticalSyllogism,
                    requires_relevance: true,
                    apply: hypothetical_syllogism,
                },
            ],
        }
    }
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(&self) -> &[InferenceRule] {
        &self.rules
    }

    pub fn get(&self, kind: RuleKind) -> Option<&InferenceRule> {
        self.rules.iter().find(|r| r.kind == kind)
    }

    /// Every derivation from `premises`, keeping only relevant ones for rules
    /// that need it when `enforce_relevance` is set.
    pub fn derive_all(
        &self,
        arena: &FormulaArena,
        premises: &[Formula],
        target: Option<&Formula>,
        enforce_relevance: bool,
    ) -> Vec<(RuleKind, Derivation)> {
        self.rules
            .iter()
            .flat_map(|rule| {
                (rule.apply)(arena, premises, target)
                    .into_iter()
                    .filter(move |d| !(enforce_relevance && rule.requires_relevance) || d.is_relevant())
                    .map(move |d| (rule.kind, d))
            })
            .collect()
    }
}

/// A → B, A ⊢ B
fn modus_ponens(_: &FormulaArena, premises: &[Formula], _: Option<&Formula>) -> Vec<Derivation> {
    premises
        .iter()
        .filter_map(|imp| {
            let (antecedent, consequent) = imp.as_implication()?;
            let minor = premises.iter().find(|p| *p == antecedent)?;
            Some(Derivation {
                formula: consequent.clone(),
                inputs: vec![imp.clone(), minor.clone()],
            })
        })
        .collect()
}

/// A, B ⊢ A ∧ B, only towards a conjunctive target.
fn conjunction_introduction(
    _: &FormulaArena,
    premises: &[Formula],
    target: Option<&Formula>,
) -> Vec<Derivation> {
    let Some(target) = target else {
        return Vec::new();
    };
    let Some((left, right)) = target.as_conjunction() else {
        return Vec::new();
    };
    match (
        premises.iter().find(|p| *p == left),
        premises.iter().find(|p| *p == right),
    ) {
        (Some(l), Some(r)) => vec![Derivation {
            formula: target.clone(),
            inputs: vec![l.clone(), r.clone()],
        }],
        _ => Vec::new(),
    }
}

/// A ∧ B ⊢ A and A ∧ B ⊢ B
fn conjunction_elimination(
    _: &FormulaArena,
    premises: &[Formula],
    _: Option<&Formula>,
) -> Vec<Derivation> {
    premises
        .iter()
        .filter_map(|p| p.as_conjunction().map(|(l, r)| (p, l, r)))
        .flat_map(|(p, l, r)| {
            [l, r].into_iter().map(move |part| Derivation {
                formula: part.clone(),
                inputs: vec![p.clone()],
            })
        })
        .collect()
}

/// ∀x φ ⊢ φ[t/x], for the term `t` that makes φ[t/x] the target.
fn universal_instantiation(
    arena: &FormulaArena,
    premises: &[Formula],
    target: Option<&Formula>,
) -> Vec<Derivation> {
    let Some(target) = target else {
        return Vec::new();
    };
    premises
        .iter()
        .filter_map(|p| {
            let (quantifier, variable, body) = p.as_quantified()?;
            if quantifier != relogic_ir::Quantifier::ForAll {
                return None;
            }
            let witness = body.instance_witness(variable, target)?;
            Some(Derivation {
                formula: arena.substitute(body, variable, &witness),
                inputs: vec![p.clone()],
            })
        })
        .collect()
}

/// A → B, B → C ⊢ A → C
fn hypothetical_syllogism(
    arena: &FormulaArena,
    premises: &[Formula],
    _: Option<&Formula>,
) -> Vec<Derivation> {
    let mut out = Vec::new();
    for first in premises {
        let Some((a, b)) = first.as_implication() else {
            continue;
        };
        for second in premises {
            if let Some((b2, c)) = second.as_implication() {
                if b == b2 && first != second {
                    out.push(Derivation {
                        formula: arena.implies(a.clone(), c.clone()),
                        inputs: vec![first.clone(), second.clone()],
                    });
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use relogic_ir::Term;

    #[test]
    fn test_table_has_all_rules() {
        let table = RuleTable::new();
        assert_eq!(table.rules().len(), 5);
        assert!(table.get(RuleKind::ModusPonens).unwrap().requires_relevance);
        assert!(!table.get(RuleKind::ConjunctionElimination).unwrap().requires_relevance);
        assert!(table.get(RuleKind::Premise).is_none());
    }

    #[test]
    fn test_modus_ponens_relevance_filter() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let q = arena.prop("Q");
        let premises = vec![p.clone(), arena.implies(p, q.clone())];
        let table = RuleTable::new();

        let classical = table.derive_all(&arena, &premises, None, false);
        assert!(classical
            .iter()
            .any(|(k, d)| *k == RuleKind::ModusPonens && d.formula == q));

        let relevant = table.derive_all(&arena, &premises, None, true);
        assert!(!relevant.iter().any(|(k, _)| *k == RuleKind::ModusPonens));
    }

    #[test]
    fn test_universal_instantiation_towards_target() {
        let arena = FormulaArena::new();
        let rule = arena.forall(
            "x",
            arena.implies(
                arena.atom("man", vec![Term::var("x")]),
                arena.atom("mortal", vec![Term::var("x")]),
            ),
        );
        let target = arena.implies(
            arena.atom("man", vec![Term::constant("socrates")]),
            arena.atom("mortal", vec![Term::constant("socrates")]),
        );

        let derived = universal_instantiation(&arena, &[rule], Some(&target));
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].formula, target);
    }

    #[test]
    fn test_hypothetical_syllogism() {
        let arena = FormulaArena::new();
        let a = arena.atom("A", vec![Term::var("x")]);
        let b = arena.atom("B", vec![Term::var("x")]);
        let c = arena.atom("C", vec![Term::var("x")]);
        let premises = vec![arena.implies(a.clone(), b.clone()), arena.implies(b, c.clone())];

        let derived = hypothetical_syllogism(&arena, &premises, None);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].formula.canonical(), "(A(x) → C(x))");
        assert!(derived[0].is_relevant());
    }

    #[test]
    fn test_conjunction_rules() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let q = arena.prop("Q");
        let conj = arena.and(p.clone(), q.clone());

        let parts = conjunction_elimination(&arena, std::slice::from_ref(&conj), None);
        assert_eq!(parts.len(), 2);

        let built = conjunction_introduction(&arena, &[p, q], Some(&conj));
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].formula, conj);
    }
}
