//! Syntactic relevance validation.
//!
//! A fast verdict on whether an argument is even a candidate for relevant
//! derivation. Checks run in order:
//!
//! 1. **Circular reasoning**: a premise is the conclusion, or has it as a
//!    top-level conjunct. Stops at the first offending premise.
//! 2. **Connectivity**: premises and conclusion are linked by shared predicate
//!    names. Every premise outside the conclusion's component is named, then
//!    checking stops.
//! 3. **Quantifier scope**: each quantifier scope of a premise must reappear in
//!    the conclusion. One violation per offending premise.
//! 4. **Distribution**: a step from `A ∧ (B ∨ C)` to `(A ∧ B) ∨ (A ∧ C)` is only
//!    allowed when the system has the distribution axiom.
//!
//! Violations are returned as tags that start with their category and use
//! 1-indexed premise numbers.

use indexmap::IndexSet;
use relogic_ir::{Formula, QuantifierScope};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::systems::axioms::is_distribution_pair;
use crate::systems::{create_system, SystemKind};

/// Validation outcome
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violated_constraints: Vec<String>,
}

impl ValidationResult {
    fn from_violations(violated_constraints: Vec<String>) -> Self {
        ValidationResult {
            is_valid: violated_constraints.is_empty(),
            violated_constraints,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RelevanceValidator {
    system: SystemKind,
}

impl Default for RelevanceValidator {
    fn default() -> Self {
        Self::new(SystemKind::R)
    }
}

impl RelevanceValidator {
    pub fn new(system: SystemKind) -> Self {
        RelevanceValidator { system }
    }

    pub fn system(&self) -> SystemKind {
        self.system
    }

    pub fn validate(&self, premises: &[Formula], conclusion: &Formula) -> ValidationResult {
        if let Some(tag) = check_circular(premises, conclusion) {
            debug!(%tag, "circular argument");
            return ValidationResult::from_violations(vec![tag]);
        }

        let disconnected = disconnected_premises(premises, conclusion);
        if !disconnected.is_empty() {
            let names: Vec<String> = disconnected.iter().map(|i| format!("P{}", i + 1)).collect();
            let tag = format!(
                "DISCONNECTED: {} premise(s) not connected to conclusion - remove premises: {}",
                disconnected.len(),
                names.join(", ")
            );
            debug!(%tag, "disconnected argument");
            return ValidationResult::from_violations(vec![tag]);
        }

        let mut violations = check_quantifier_scopes(premises, conclusion);
        violations.extend(self.check_distribution(premises, conclusion));

        debug!(
            system = %self.system,
            premises = premises.len(),
            violations = violations.len(),
            "relevance validation finished"
        );
        ValidationResult::from_violations(violations)
    }

    fn check_distribution(&self, premises: &[Formula], conclusion: &Formula) -> Vec<String> {
        if create_system(self.system).axioms().distribution {
            return Vec::new();
        }
        premises
            .iter()
            .enumerate()
            .filter(|(_, p)| is_distribution_pair(p, conclusion))
            .map(|(i, _)| {
                format!(
                    "DISTRIBUTION: Premise {} requires the distribution law, which system {} does not provide",
                    i + 1,
                    self.system
                )
            })
            .collect()
    }
}

/// Validate under system R.
pub fn validate(premises: &[Formula], conclusion: &Formula) -> ValidationResult {
    RelevanceValidator::default().validate(premises, conclusion)
}

fn check_circular(premises: &[Formula], conclusion: &Formula) -> Option<String> {
    premises.iter().enumerate().find_map(|(i, premise)| {
        if premise == conclusion {
            Some(format!(
                "CIRCULAR REASONING: Premise {} is identical to conclusion - indicates missing explicit premises",
                i + 1
            ))
        } else if premise.as_conjunction().is_some()
            && conjuncts(premise).into_iter().any(|c| c == conclusion)
        {
            Some(format!(
                "CIRCULAR REASONING: Premise {} contains conclusion as a conjunct - indicates missing explicit premises",
                i + 1
            ))
        } else {
            None
        }
    })
}

/// Conjuncts of a top-level (possibly nested) conjunction.
fn conjuncts(formula: &Formula) -> Vec<&Formula> {
    match formula.as_conjunction() {
        Some((l, r)) => {
            let mut out = conjuncts(l);
            out.extend(conjuncts(r));
            out
        }
        None => vec![formula],
    }
}

/// Indices of premises outside the conclusion's component of the shared-predicate graph.
pub(crate) fn disconnected_premises(premises: &[Formula], conclusion: &Formula) -> Vec<usize> {
    let nodes: Vec<&Formula> = premises.iter().chain(std::iter::once(conclusion)).collect();
    let root = nodes.len() - 1;

    let mut reached = vec![false; nodes.len()];
    let mut stack = vec![root];
    reached[root] = true;
    while let Some(current) = stack.pop() {
        for next in 0..nodes.len() {
            if !reached[next] && nodes[current].shares_predicate_with(nodes[next]) {
                reached[next] = true;
                stack.push(next);
            }
        }
    }

    (0..premises.len()).filter(|i| !reached[*i]).collect()
}

fn check_quantifier_scopes(premises: &[Formula], conclusion: &Formula) -> Vec<String> {
    let available: IndexSet<QuantifierScope> = conclusion.quantifier_scopes().into_iter().collect();
    premises
        .iter()
        .enumerate()
        .filter_map(|(i, premise)| {
            let unmatched: IndexSet<String> = premise
                .quantifier_scopes()
                .into_iter()
                .filter(|scope| !available.contains(scope))
                .map(|scope| scope.to_string())
                .collect();
            if unmatched.is_empty() {
                None
            } else {
                Some(format!(
                    "QUANTIFIER SCOPE: Premise {} binds {} with no matching scope in conclusion",
                    i + 1,
                    unmatched.into_iter().collect::<Vec<_>>().join(", ")
                ))
            }
        })
        .collect()
}
