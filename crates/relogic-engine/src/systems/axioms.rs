//! Axiom records, frame-condition records and theorem schemas.
//!
//! # Schemas
//!
//! - **Self-implication**: A → A
//! - **Contraction**: A → (A ∧ A)
//! - **Conjunction elimination**: (A ∧ B) → A, (A ∧ B) → B
//! - **Disjunction introduction**: A → (A ∨ B), B → (A ∨ B)
//! - **Suffixing**: (A → B) → ((B → C) → (A → C))
//! - **Prefixing**: (A → B) → ((C → A) → (C → B))
//! - **Consequent conjunction**: ((A → B) ∧ (A → C)) → (A → (B ∧ C))
//! - **Double negation**: ¬¬A → A
//! - **Distribution**: (A ∧ (B ∨ C)) → ((A ∧ B) ∨ (A ∧ C))
//!
//! Schemas are recognized structurally; two subformulas match when their canonical
//! forms agree.

use relogic_ir::{Formula, FormulaKind};
use serde::{Deserialize, Serialize};

/// Which axiom groups a system adopts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axioms {
    pub self_implication: bool,
    pub distribution: bool,
    pub contraction: bool,
    pub basic_relevance: bool,
    pub entailment_axioms: bool,
}

impl Axioms {
    /// Names of the adopted axiom groups.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.self_implication {
            names.push("self-implication");
        }
        if self.basic_relevance {
            names.push("basic-relevance");
        }
        if self.contraction {
            names.push("contraction");
        }
        if self.entailment_axioms {
            names.push("entailment");
        }
        if self.distribution {
            names.push("distribution");
        }
        names
    }
}

/// Conditions the ternary relation of a system's models must satisfy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameConditions {
    pub minimal: bool,
    pub reflexivity: bool,
    pub commutativity: bool,
    pub associativity: bool,
    pub distributivity: bool,
    pub contraction: bool,
    pub basic_relevance: bool,
}

impl FrameConditions {
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.minimal, "minimal"),
            (self.basic_relevance, "basic-relevance"),
            (self.reflexivity, "reflexivity"),
            (self.contraction, "contraction"),
            (self.commutativity, "commutativity"),
            (self.associativity, "associativity"),
            (self.distributivity, "distributivity"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

/// A recognizable theorem shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TheoremSchema {
    SelfImplication,
    Contraction,
    ConjunctionElimination,
    DisjunctionIntroduction,
    Suffixing,
    Prefixing,
    ConsequentConjunction,
    DoubleNegation,
    Distribution,
}

impl TheoremSchema {
    pub fn name(&self) -> &'static str {
        match self {
            TheoremSchema::SelfImplication => "self-implication",
            TheoremSchema::Contraction => "contraction",
            TheoremSchema::ConjunctionElimination => "conjunction-elimination",
            TheoremSchema::DisjunctionIntroduction => "disjunction-introduction",
            TheoremSchema::Suffixing => "suffixing",
            TheoremSchema::Prefixing => "prefixing",
            TheoremSchema::ConsequentConjunction => "consequent-conjunction",
            TheoremSchema::DoubleNegation => "double-negation",
            TheoremSchema::Distribution => "distribution",
        }
    }

    pub fn matches(&self, formula: &Formula) -> bool {
        match self {
            TheoremSchema::SelfImplication => verify_self_implication(formula),
            TheoremSchema::Contraction => verify_contraction(formula),
            TheoremSchema::ConjunctionElimination => verify_conjunction_elimination(formula),
            TheoremSchema::DisjunctionIntroduction => verify_disjunction_introduction(formula),
            TheoremSchema::Suffixing => verify_suffixing(formula),
            TheoremSchema::Prefixing => verify_prefixing(formula),
            TheoremSchema::ConsequentConjunction => verify_consequent_conjunction(formula),
            TheoremSchema::DoubleNegation => verify_double_negation(formula),
            TheoremSchema::Distribution => verify_distribution(formula),
        }
    }
}

/// A → A
pub fn verify_self_implication(formula: &Formula) -> bool {
    matches!(formula.kind(), FormulaKind::Implies(a, b) if a == b)
}

/// A → (A ∧ A)
pub fn verify_contraction(formula: &Formula) -> bool {
    matches!(
        formula.kind(),
        FormulaKind::Implies(a, conj) if matches!(
            conj.kind(),
            FormulaKind::And(l, r) if l == a && r == a
        )
    )
}

/// (A ∧ B) → A or (A ∧ B) → B
pub fn verify_conjunction_elimination(formula: &Formula) -> bool {
    matches!(
        formula.kind(),
        FormulaKind::Implies(conj, c) if matches!(
            conj.kind(),
            FormulaKind::And(l, r) if l == c || r == c
        )
    )
}

/// A → (A ∨ B) or B → (A ∨ B)
pub fn verify_disjunction_introduction(formula: &Formula) -> bool {
    matches!(
        formula.kind(),
        FormulaKind::Implies(a, disj) if matches!(
            disj.kind(),
            FormulaKind::Or(l, r) if l == a || r == a
        )
    )
}

/// (A → B) → ((B → C) → (A → C))
pub fn verify_suffixing(formula: &Formula) -> bool {
    matches!(
        formula.kind(),
        FormulaKind::Implies(first, rest) if matches!(
            (first.kind(), rest.kind()),
            (FormulaKind::Implies(a1, b1), FormulaKind::Implies(second, third)) if matches!(
                (second.kind(), third.kind()),
                (FormulaKind::Implies(b2, c1), FormulaKind::Implies(a2, c2))
                    if a1 == a2 && b1 == b2 && c1 == c2
            )
        )
    )
}

/// (A → B) → ((C → A) → (C → B))
pub fn verify_prefixing(formula: &Formula) -> bool {
    matches!(
        formula.kind(),
        FormulaKind::Implies(first, rest) if matches!(
            (first.kind(), rest.kind()),
            (FormulaKind::Implies(a1, b1), FormulaKind::Implies(second, third)) if matches!(
                (second.kind(), third.kind()),
                (FormulaKind::Implies(c1, a2), FormulaKind::Implies(c2, b2))
                    if a1 == a2 && b1 == b2 && c1 == c2
            )
        )
    )
}

/// ((A → B) ∧ (A → C)) → (A → (B ∧ C))
pub fn verify_consequent_conjunction(formula: &Formula) -> bool {
    matches!(
        formula.kind(),
        FormulaKind::Implies(conj, imp) if matches!(
            (conj.kind(), imp.kind()),
            (FormulaKind::And(left, right), FormulaKind::Implies(a3, bc)) if matches!(
                (left.kind(), right.kind(), bc.kind()),
                (
                    FormulaKind::Implies(a1, b1),
                    FormulaKind::Implies(a2, c1),
                    FormulaKind::And(b2, c2)
                ) if a1 == a2 && a2 == a3 && b1 == b2 && c1 == c2
            )
        )
    )
}

/// ¬¬A → A
pub fn verify_double_negation(formula: &Formula) -> bool {
    matches!(
        formula.kind(),
        FormulaKind::Implies(nn, a) if matches!(
            nn.kind(),
            FormulaKind::Not(n) if matches!(n.kind(), FormulaKind::Not(inner) if inner == a)
        )
    )
}

/// (A ∧ (B ∨ C)) → ((A ∧ B) ∨ (A ∧ C))
pub fn verify_distribution(formula: &Formula) -> bool {
    match formula.kind() {
        FormulaKind::Implies(lhs, rhs) => is_distribution_pair(lhs, rhs),
        _ => false,
    }
}

/// Whether `to` is the distributed form of `from`: `A ∧ (B ∨ C)` and
/// `(A ∧ B) ∨ (A ∧ C)`.
pub fn is_distribution_pair(from: &Formula, to: &Formula) -> bool {
    matches!(
        (from.kind(), to.kind()),
        (FormulaKind::And(a, bc), FormulaKind::Or(ab, ac)) if matches!(
            (bc.kind(), ab.kind(), ac.kind()),
            (
                FormulaKind::Or(b, c),
                FormulaKind::And(a1, b1),
                FormulaKind::And(a2, c1)
            ) if a1 == a && a2 == a && b1 == b && c1 == c
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use relogic_ir::FormulaArena;

    #[test]
    fn test_self_implication() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let q = arena.prop("Q");

        assert!(verify_self_implication(&arena.implies(p.clone(), p.clone())));
        assert!(!verify_self_implication(&arena.implies(p, q)));
    }

    #[test]
    fn test_contraction_and_elimination() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let q = arena.prop("Q");

        let contraction = arena.implies(p.clone(), arena.and(p.clone(), p.clone()));
        assert!(verify_contraction(&contraction));

        let elim = arena.implies(arena.and(p.clone(), q.clone()), q.clone());
        assert!(verify_conjunction_elimination(&elim));
        assert!(!verify_conjunction_elimination(&arena.implies(q, p)));
    }

    #[test]
    fn test_suffixing_and_prefixing() {
        let arena = FormulaArena::new();
        let a = arena.prop("A");
        let b = arena.prop("B");
        let c = arena.prop("C");

        let suffixing = arena.implies(
            arena.implies(a.clone(), b.clone()),
            arena.implies(
                arena.implies(b.clone(), c.clone()),
                arena.implies(a.clone(), c.clone()),
            ),
        );
        assert!(verify_suffixing(&suffixing));
        assert!(!verify_prefixing(&suffixing));

        let prefixing = arena.implies(
            arena.implies(a.clone(), b.clone()),
            arena.implies(
                arena.implies(c.clone(), a.clone()),
                arena.implies(c.clone(), b.clone()),
            ),
        );
        assert!(verify_prefixing(&prefixing));
    }

    #[test]
    fn test_distribution() {
        let arena = FormulaArena::new();
        let a = arena.prop("A");
        let b = arena.prop("B");
        let c = arena.prop("C");

        let from = arena.and(a.clone(), arena.or(b.clone(), c.clone()));
        let to = arena.or(
            arena.and(a.clone(), b.clone()),
            arena.and(a.clone(), c.clone()),
        );
        assert!(is_distribution_pair(&from, &to));
        assert!(verify_distribution(&arena.implies(from.clone(), to.clone())));
        assert!(!verify_distribution(&arena.implies(to, from)));
    }

    #[test]
    fn test_double_negation() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let f = arena.implies(arena.not(arena.not(p.clone())), p);
        assert!(TheoremSchema::DoubleNegation.matches(&f));
    }

    #[test]
    fn test_record_names() {
        let axioms = Axioms {
            self_implication: true,
            contraction: true,
            ..Axioms::default()
        };
        assert_eq!(axioms.names(), vec!["self-implication", "contraction"]);

        let frame = FrameConditions {
            minimal: true,
            reflexivity: true,
            ..FrameConditions::default()
        };
        assert_eq!(frame.names(), vec!["minimal", "reflexivity"]);
    }
}
