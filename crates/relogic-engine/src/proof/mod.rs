//! Proof search and argument validation.
//!
//! [`ProofEngine::validate_argument`] combines the pieces: relevance scoring, the
//! system's inference check, bounded proof search and, for invalid arguments, a
//! countermodel attempt.
//!
//! ```rust
//! use relogic_engine::{EngineConfig, ProofEngine, ProofLogic, SystemKind};
//! use relogic_ir::{Argument, FormulaArena, Term};
//!
//! let arena = FormulaArena::new();
//! let bird = arena.atom("bird", vec![Term::var("x")]);
//! let fly = arena.atom("fly", vec![Term::var("x")]);
//! let rule = arena.implies(bird.clone(), fly.clone());
//! let argument = Argument::new(vec![bird, rule], fly);
//!
//! let engine = ProofEngine::new(EngineConfig::default());
//! let result = engine.validate_argument(&arena, &argument, ProofLogic::Relevance(SystemKind::R));
//! assert!(result.is_valid);
//! assert!(result.has_relevance);
//! ```

mod relevance;
mod rules;
mod search;

use std::fmt;
use std::str::FromStr;

use relogic_ir::{Argument, Formula, FormulaArena};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span, warn};

use crate::config::EngineConfig;
use crate::countermodel::{Countermodel, CountermodelGenerator};
use crate::error::{EngineError, EngineResult};
use crate::systems::{create_system, SystemKind};

pub use relevance::RelevanceScorer;
pub use rules::{Derivation, InferenceRule, RuleFn, RuleKind, RuleTable};

use search::ProofSearch;

/// One line of a proof.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProofStep {
    /// 1-based line number
    pub line: usize,
    pub formula: Formula,
    pub rule: RuleKind,
    /// Line numbers of the steps this one was obtained from
    pub from: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
}

impl Proof {
    pub fn conclusion(&self) -> Option<&Formula> {
        self.steps.last().map(|s| &s.formula)
    }

    pub fn formulas(&self) -> Vec<Formula> {
        self.steps.iter().map(|s| s.formula.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{:>3}. {}  [{}", step.line, step.formula, step.rule)?;
            if !step.from.is_empty() {
                let from: Vec<String> = step.from.iter().map(|i| i.to_string()).collect();
                write!(f, " {}", from.join(", "))?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Logic a proof is searched in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProofLogic {
    Classical,
    Relevance(SystemKind),
}

impl ProofLogic {
    pub fn system(&self) -> Option<SystemKind> {
        match self {
            ProofLogic::Classical => None,
            ProofLogic::Relevance(kind) => Some(*kind),
        }
    }
}

impl fmt::Display for ProofLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProofLogic::Classical => f.write_str("classical"),
            ProofLogic::Relevance(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for ProofLogic {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("classical") {
            Ok(ProofLogic::Classical)
        } else {
            s.parse().map(ProofLogic::Relevance)
        }
    }
}

/// Full verdict on an argument.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentValidation {
    pub is_valid: bool,
    pub has_relevance: bool,
    pub relevance_score: f64,
    pub proof: Option<Proof>,
    pub counterexample: Option<Countermodel>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProofEngine {
    config: EngineConfig,
    rules: RuleTable,
    scorer: RelevanceScorer,
    countermodels: CountermodelGenerator,
}

impl Default for ProofEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ProofEngine {
    pub fn new(config: EngineConfig) -> Self {
        ProofEngine {
            rules: RuleTable::new(),
            scorer: RelevanceScorer::from_config(&config.relevance),
            countermodels: CountermodelGenerator::new(config.countermodel.clone()),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Logic used when a caller does not pick one.
    pub fn default_logic(&self) -> ProofLogic {
        ProofLogic::Relevance(self.config.default_system)
    }

    pub fn relevance_score(&self, premises: &[Formula], conclusion: &Formula) -> f64 {
        self.scorer.score(premises, conclusion)
    }

    /// Search for a proof of `goal` from `premises`.
    ///
    /// Under a relevance logic, rules that need it only fire when their output
    /// shares content with their inputs. Exceeding the step budget is an error.
    pub fn find_proof(
        &self,
        arena: &FormulaArena,
        premises: &[Formula],
        goal: &Formula,
        logic: ProofLogic,
    ) -> EngineResult<Option<Proof>> {
        // Classical search still recognizes theorems; R's schemas are all classical tautologies.
        let theorems = create_system(logic.system().unwrap_or(SystemKind::R));
        let search = ProofSearch::new(
            arena,
            premises,
            &self.rules,
            theorems.as_ref(),
            logic != ProofLogic::Classical,
            self.config.proof.max_depth,
            self.config.proof.max_steps,
        );
        let proof = search.run(goal)?;
        debug!(%logic, goal = %goal, found = proof.is_some(), "proof search finished");
        Ok(proof)
    }

    /// Decide whether `argument` is valid in `logic`.
    ///
    /// A relevance logic rejects an argument with premises whose relevance score
    /// does not exceed the threshold before any proof is attempted.
    pub fn validate_argument(
        &self,
        arena: &FormulaArena,
        argument: &Argument,
        logic: ProofLogic,
    ) -> ArgumentValidation {
        let span = info_span!("validate_argument", %logic, premises = argument.premises.len());
        let _enter = span.enter();

        let score = self.scorer.score(&argument.premises, &argument.conclusion);
        let mut result = ArgumentValidation {
            has_relevance: self.scorer.is_relevant(score),
            relevance_score: score,
            ..ArgumentValidation::default()
        };

        if let ProofLogic::Relevance(kind) = logic {
            if !argument.premises.is_empty() && !result.has_relevance {
                result.errors.push(format!(
                    "Premises are not relevant to the conclusion (relevance score {:.2}, threshold {:.2})",
                    score, self.scorer.threshold
                ));
                return self.finish_invalid(argument, result);
            }
            let system = create_system(kind);
            if !argument.premises.is_empty()
                && !system.validate_inference(&argument.premises, &argument.conclusion)
            {
                result.errors.push(format!(
                    "System {} rejects the inference: no premise shares an atomic formula with the conclusion",
                    kind
                ));
                return self.finish_invalid(argument, result);
            }
        }

        match self.find_proof(arena, &argument.premises, &argument.conclusion, logic) {
            Ok(Some(proof)) => {
                result.is_valid = true;
                result.proof = Some(proof);
                info!(%logic, score, "argument is valid");
                result
            }
            Ok(None) => {
                result.errors.push(format!(
                    "No proof found within depth {}",
                    self.config.proof.max_depth
                ));
                self.finish_invalid(argument, result)
            }
            Err(e) => {
                warn!(error = %e, "proof search aborted");
                result.errors.push(format!("Proof search failed: {}", e));
                self.finish_invalid(argument, result)
            }
        }
    }

    fn finish_invalid(&self, argument: &Argument, mut result: ArgumentValidation) -> ArgumentValidation {
        result.is_valid = false;
        result.counterexample = self.countermodels.find_countermodel(argument);
        if result.counterexample.is_none() {
            result.warnings.push(format!(
                "No countermodel found within {} worlds; this does not establish validity",
                self.config.countermodel.max_worlds
            ));
        }
        info!(
            errors = result.errors.len(),
            countermodel = result.counterexample.is_some(),
            "argument is invalid"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use relogic_ir::Term;

    #[test]
    fn test_parse_logic() {
        assert_eq!("classical".parse::<ProofLogic>().unwrap(), ProofLogic::Classical);
        assert_eq!(
            "e".parse::<ProofLogic>().unwrap(),
            ProofLogic::Relevance(SystemKind::E)
        );
        assert!("intuitionistic".parse::<ProofLogic>().is_err());
        assert_eq!(ProofLogic::Relevance(SystemKind::T).to_string(), "T");
    }

    #[test]
    fn test_irrelevant_argument_rejected_before_search() {
        let arena = FormulaArena::new();
        let argument = Argument::new(
            vec![
                arena.atom("P", vec![Term::constant("a")]),
                arena.atom("Q", vec![Term::constant("b")]),
            ],
            arena.atom("R", vec![Term::constant("c")]),
        );
        let engine = ProofEngine::default();

        for kind in SystemKind::HIERARCHY {
            let result = engine.validate_argument(&arena, &argument, ProofLogic::Relevance(kind));
            assert!(!result.is_valid);
            assert!(!result.has_relevance);
            assert_relative_eq!(result.relevance_score, 0.0);
            assert!(result.proof.is_none());
            assert!(result.errors[0].starts_with("Premises are not relevant"));
        }
    }

    #[test]
    fn test_classical_logic_skips_relevance_gate() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let q = arena.prop("Q");
        let argument = Argument::new(vec![p.clone(), arena.implies(p, q.clone())], q);
        let engine = ProofEngine::default();

        let classical = engine.validate_argument(&arena, &argument, ProofLogic::Classical);
        assert!(classical.is_valid);

        let relevant = engine.validate_argument(&arena, &argument, ProofLogic::Relevance(SystemKind::R));
        assert!(!relevant.is_valid);
    }

    #[test]
    fn test_theorem_without_premises() {
        let arena = FormulaArena::new();
        let p = arena.prop("P");
        let contraction = arena.implies(p.clone(), arena.and(p.clone(), p));
        let argument = Argument::new(Vec::new(), contraction);
        let engine = ProofEngine::default();

        let in_t = engine.validate_argument(&arena, &argument, ProofLogic::Relevance(SystemKind::T));
        assert!(in_t.is_valid);
        assert_eq!(in_t.proof.unwrap().steps[0].rule, RuleKind::Axiom);

        let in_b = engine.validate_argument(&arena, &argument, ProofLogic::Relevance(SystemKind::B));
        assert!(!in_b.is_valid);
    }

    #[test]
    fn test_invalid_argument_gets_countermodel() {
        let arena = FormulaArena::new();
        let x = || vec![Term::var("x")];
        let bird = arena.atom("bird", x());
        let fly = arena.atom("fly", x());
        // Affirming the consequent.
        let argument = Argument::new(vec![fly.clone(), arena.implies(bird.clone(), fly)], bird);
        let engine = ProofEngine::default();

        let result = engine.validate_argument(&arena, &argument, ProofLogic::Relevance(SystemKind::R));
        assert!(!result.is_valid);
        assert!(result.has_relevance);
        assert!(result.counterexample.is_some());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_step_budget_becomes_error_entry() {
        let arena = FormulaArena::new();
        let x = || vec![Term::var("x")];
        let a = arena.atom("A", x());
        let b = arena.atom("B", x());
        let c = arena.atom("C", x());
        let argument = Argument::new(
            vec![arena.implies(b.clone(), a.clone()), arena.implies(c.clone(), a.clone()), arena.implies(a.clone(), b)],
            a,
        );
        let mut config = EngineConfig::default();
        config.proof.max_steps = 2;
        let engine = ProofEngine::new(config);

        let result = engine.validate_argument(&arena, &argument, ProofLogic::Relevance(SystemKind::R));
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.starts_with("Proof search failed: Proof search exceeded")));
    }

    #[test]
    fn test_proof_display() {
        let arena = FormulaArena::new();
        let x = || vec![Term::var("x")];
        let bird = arena.atom("bird", x());
        let fly = arena.atom("fly", x());
        let rule = arena.implies(bird.clone(), fly.clone());
        let engine = ProofEngine::default();

        let proof = engine
            .find_proof(&arena, &[bird, rule], &fly, ProofLogic::Relevance(SystemKind::B))
            .unwrap()
            .unwrap();
        let text = proof.to_string();
        assert!(text.contains("[Premise]"));
        assert!(text.ends_with("fly(x)  [Modus Ponens 1, 2]\n"));
    }
}
