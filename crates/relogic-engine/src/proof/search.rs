//! Bounded backward-chaining proof search.

use indexmap::{IndexMap, IndexSet};
use relogic_ir::{Formula, FormulaArena, FormulaKind, Quantifier};
use tracing::trace;

use super::rules::{RuleKind, RuleTable};
use super::{Proof, ProofStep};
use crate::error::{EngineError, EngineResult};
use crate::systems::RelevanceSystem;

/// One search over a fixed premise set.
///
/// Goals are tried in this order: a premise, a theorem of the system, a single
/// forward rule application against the full premise set, then backward modus
/// ponens (also through instances of universal premises), conjunction
/// introduction and hypothetical syllogism on sub-goals. A goal already on the
/// current path is not expanded again. Every expanded goal counts against the
/// step budget.
pub(crate) struct ProofSearch<'a> {
    arena: &'a FormulaArena,
    premises: &'a [Formula],
    rules: &'a RuleTable,
    theorems: &'a dyn RelevanceSystem,
    enforce_relevance: bool,
    max_depth: usize,
    max_steps: usize,
    expanded: usize,
    steps: Vec<ProofStep>,
    proved: IndexMap<String, usize>,
    path: IndexSet<String>,
}

impl<'a> ProofSearch<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        arena: &'a FormulaArena,
        premises: &'a [Formula],
        rules: &'a RuleTable,
        theorems: &'a dyn RelevanceSystem,
        enforce_relevance: bool,
        max_depth: usize,
        max_steps: usize,
    ) -> Self {
        ProofSearch {
            arena,
            premises,
            rules,
            theorems,
            enforce_relevance,
            max_depth,
            max_steps,
            expanded: 0,
            steps: Vec::new(),
            proved: IndexMap::new(),
            path: IndexSet::new(),
        }
    }

    pub(crate) fn run(mut self, goal: &Formula) -> EngineResult<Option<Proof>> {
        Ok(self
            .prove(goal, 0)?
            .map(|_| Proof { steps: self.steps }))
    }

    /// Number of goals expanded so far.
    #[cfg(test)]
    pub(crate) fn expanded(&self) -> usize {
        self.expanded
    }

    fn prove(&mut self, goal: &Formula, depth: usize) -> EngineResult<Option<usize>> {
        if let Some(&index) = self.proved.get(goal.canonical()) {
            return Ok(Some(index));
        }
        self.expanded += 1;
        if self.expanded > self.max_steps {
            return Err(EngineError::StepLimitExceeded {
                limit: self.max_steps,
            });
        }
        trace!(depth, goal = %goal, "expanding goal");

        if let Some(premise) = self.premises.iter().find(|p| *p == goal) {
            return Ok(Some(self.push(premise.clone(), RuleKind::Premise, Vec::new())));
        }
        if depth >= self.max_depth || self.path.contains(goal.canonical()) {
            return Ok(None);
        }
        if self.theorems.is_theorem_valid(goal) {
            return Ok(Some(self.push(goal.clone(), RuleKind::Axiom, Vec::new())));
        }

        self.path.insert(goal.canonical().to_string());
        let result = self.expand(goal, depth);
        self.path.shift_remove(goal.canonical());
        result
    }

    fn expand(&mut self, goal: &Formula, depth: usize) -> EngineResult<Option<usize>> {
        if let Some(index) = self.forward_step(goal) {
            return Ok(Some(index));
        }
        if let Some(index) = self.backward_modus_ponens(goal, depth)? {
            return Ok(Some(index));
        }
        if let Some((left, right)) = goal.as_conjunction() {
            let checkpoint = self.steps.len();
            if let Some(l) = self.prove(left, depth + 1)? {
                if let Some(r) = self.prove(right, depth + 1)? {
                    return Ok(Some(self.push(
                        goal.clone(),
                        RuleKind::ConjunctionIntroduction,
                        vec![l, r],
                    )));
                }
            }
            self.rollback(checkpoint);
        }
        self.backward_syllogism(goal, depth)
    }

    fn forward_step(&mut self, goal: &Formula) -> Option<usize> {
        let derivation = self
            .rules
            .derive_all(self.arena, self.premises, Some(goal), self.enforce_relevance)
            .into_iter()
            .find(|(_, d)| d.formula == *goal)?;
        let (kind, derivation) = derivation;
        let inputs = derivation
            .inputs
            .into_iter()
            .map(|input| self.premise_step(input))
            .collect();
        Some(self.push(goal.clone(), kind, inputs))
    }

    fn backward_modus_ponens(&mut self, goal: &Formula, depth: usize) -> EngineResult<Option<usize>> {
        for (source, instance) in self.implications_into(goal) {
            let Some((antecedent, _)) = instance.as_implication() else {
                continue;
            };
            if self.enforce_relevance && !antecedent.shares_content_with(goal) {
                continue;
            }
            let checkpoint = self.steps.len();
            if let Some(minor) = self.prove(antecedent, depth + 1)? {
                let source_index = self.premise_step(source.clone());
                let major = if source == instance {
                    source_index
                } else {
                    self.push(instance, RuleKind::UniversalInstantiation, vec![source_index])
                };
                return Ok(Some(self.push(
                    goal.clone(),
                    RuleKind::ModusPonens,
                    vec![major, minor],
                )));
            }
            self.rollback(checkpoint);
        }
        Ok(None)
    }

    /// Implications with `goal` as consequent: premises themselves, or instances of
    /// universally quantified premises. Pairs are (premise, implication).
    fn implications_into(&self, goal: &Formula) -> Vec<(Formula, Formula)> {
        let mut out = Vec::new();
        for premise in self.premises {
            if let Some((_, consequent)) = premise.as_implication() {
                if consequent == goal {
                    out.push((premise.clone(), premise.clone()));
                }
                continue;
            }
            let Some((Quantifier::ForAll, variable, body)) = premise.as_quantified() else {
                continue;
            };
            let Some((_, consequent)) = body.as_implication() else {
                continue;
            };
            if let Some(witness) = consequent.instance_witness(variable, goal) {
                let instance = self.arena.substitute(body, variable, &witness);
                if instance.as_implication().map(|(_, c)| c == goal).unwrap_or(false) {
                    out.push((premise.clone(), instance));
                }
            }
        }
        out
    }

    fn backward_syllogism(&mut self, goal: &Formula, depth: usize) -> EngineResult<Option<usize>> {
        let FormulaKind::Implies(a, c) = goal.kind() else {
            return Ok(None);
        };
        for premise in self.premises {
            let Some((a2, b)) = premise.as_implication() else {
                continue;
            };
            if a2 != a.as_ref() || premise == goal {
                continue;
            }
            let bridge = self.arena.implies(b.clone(), c.as_ref().clone());
            let checkpoint = self.steps.len();
            if let Some(second) = self.prove(&bridge, depth + 1)? {
                let first = self.premise_step(premise.clone());
                return Ok(Some(self.push(
                    goal.clone(),
                    RuleKind::HypotheticalSyllogism,
                    vec![first, second],
                )));
            }
            self.rollback(checkpoint);
        }
        Ok(None)
    }

    fn premise_step(&mut self, formula: Formula) -> usize {
        match self.proved.get(formula.canonical()) {
            Some(&index) => index,
            None => self.push(formula, RuleKind::Premise, Vec::new()),
        }
    }

    fn push(&mut self, formula: Formula, rule: RuleKind, from: Vec<usize>) -> usize {
        let index = self.steps.len();
        self.proved.insert(formula.canonical().to_string(), index);
        self.steps.push(ProofStep {
            line: index + 1,
            formula,
            rule,
            from: from.into_iter().map(|i| i + 1).collect(),
        });
        index
    }

    fn rollback(&mut self, checkpoint: usize) {
        self.steps.truncate(checkpoint);
        self.proved.retain(|_, index| *index < checkpoint);
    }
}
