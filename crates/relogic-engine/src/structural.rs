//! Structural rules: weakening is checked, contraction and exchange are free.
//!
//! A derived formula is legitimate when it is one of the originals or follows from
//! them in the conservative closure of identity, conjunction elimination and
//! relevant modus ponens (the antecedent is present and shares an atom or a
//! variable with the consequent).

use indexmap::IndexSet;
use relogic_ir::Formula;
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofCheck {
    pub is_valid: bool,
    /// 0-indexed step that first violated a structural rule
    pub failed_step: Option<usize>,
    pub violations: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralRuleEnforcer;

impl StructuralRuleEnforcer {
    pub fn new() -> Self {
        StructuralRuleEnforcer
    }

    /// Formulas in `derived` that weaken `original`.
    pub fn check_weakening(&self, original: &[Formula], derived: &[Formula]) -> Vec<String> {
        let closure = closure(original);
        derived
            .iter()
            .filter(|f| !closure.contains(*f))
            .map(|f| format!("WEAKENING: {} is not derivable from the premises", f))
            .collect()
    }

    /// Reusing a premise is allowed in every system.
    pub fn check_contraction(&self, _original: &[Formula], _derived: &[Formula]) -> Vec<String> {
        Vec::new()
    }

    /// Reordering premises is allowed in every system.
    pub fn check_exchange(&self, _original: &[Formula], _derived: &[Formula]) -> Vec<String> {
        Vec::new()
    }

    /// Walk `steps` in order, each checked against the premises plus every earlier step.
    pub fn validate_proof(&self, premises: &[Formula], steps: &[Formula]) -> ProofCheck {
        let mut available: Vec<Formula> = premises.to_vec();
        for (index, step) in steps.iter().enumerate() {
            let violations = self.check_weakening(&available, std::slice::from_ref(step));
            if !violations.is_empty() {
                debug!(step = index, formula = %step, "weakening violation");
                return ProofCheck {
                    is_valid: false,
                    failed_step: Some(index),
                    violations,
                };
            }
            available.push(step.clone());
        }
        ProofCheck {
            is_valid: true,
            failed_step: None,
            violations: Vec::new(),
        }
    }
}

fn closure(original: &[Formula]) -> IndexSet<Formula> {
    let mut known: IndexSet<Formula> = original.iter().cloned().collect();
    loop {
        let mut added = Vec::new();
        for f in &known {
            if let Some((l, r)) = f.as_conjunction() {
                added.push(l.clone());
                added.push(r.clone());
            }
            if let Some((antecedent, consequent)) = f.as_implication() {
                if known.contains(antecedent) && antecedent.shares_content_with(consequent) {
                    added.push(consequent.clone());
                }
            }
        }
        let before = known.len();
        known.extend(added);
        if known.len() == before {
            return known;
        }
    }
}
