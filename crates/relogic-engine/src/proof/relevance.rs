//! Variable/predicate overlap scoring.

use relogic_ir::Formula;

use crate::config::RelevanceConfig;

/// Scores how much the premises of an argument talk about its conclusion.
///
/// A premise scores `wv · |V(p) ∩ V(c)| / max(|V(p)|, |V(c)|, 1) +
/// wp · |P(p) ∩ P(c)| / max(|P(p)|, |P(c)|, 1)` where `V` and `P` are the variable
/// and predicate sets. The argument's score is the mean over premises scoring
/// above zero, or zero when none do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceScorer {
    pub variable_weight: f64,
    pub predicate_weight: f64,
    pub threshold: f64,
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::from_config(&RelevanceConfig::default())
    }
}

impl RelevanceScorer {
    pub fn from_config(config: &RelevanceConfig) -> Self {
        RelevanceScorer {
            variable_weight: config.variable_weight,
            predicate_weight: config.predicate_weight,
            threshold: config.threshold,
        }
    }

    pub fn premise_score(&self, premise: &Formula, conclusion: &Formula) -> f64 {
        let overlap = |a: &indexmap::IndexSet<String>, b: &indexmap::IndexSet<String>| {
            let shared = a.iter().filter(|x| b.contains(*x)).count();
            shared as f64 / a.len().max(b.len()).max(1) as f64
        };
        self.variable_weight * overlap(premise.variables(), conclusion.variables())
            + self.predicate_weight * overlap(premise.predicates(), conclusion.predicates())
    }

    pub fn score(&self, premises: &[Formula], conclusion: &Formula) -> f64 {
        let positive: Vec<f64> = premises
            .iter()
            .map(|p| self.premise_score(p, conclusion))
            .filter(|s| *s > 0.0)
            .collect();
        if positive.is_empty() {
            0.0
        } else {
            positive.iter().sum::<f64>() / positive.len() as f64
        }
    }

    /// Strictly above the threshold.
    pub fn is_relevant(&self, score: f64) -> bool {
        score > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use relogic_ir::{FormulaArena, Term};

    #[test]
    fn test_premise_score_weights() {
        let arena = FormulaArena::new();
        let x = || vec![Term::var("x")];
        let bird = arena.atom("bird", x());
        let fly = arena.atom("fly", x());
        let rule = arena.implies(bird.clone(), fly.clone());
        let scorer = RelevanceScorer::default();

        assert_relative_eq!(scorer.premise_score(&bird, &fly), 0.6);
        assert_relative_eq!(scorer.premise_score(&rule, &fly), 0.8, epsilon = 1e-12);
        assert_relative_eq!(scorer.score(&[bird, rule], &fly), 0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_scores_are_not_averaged() {
        let arena = FormulaArena::new();
        let x = || vec![Term::var("x")];
        let fly = arena.atom("fly", x());
        let unrelated = arena.prop("Raining");
        let scorer = RelevanceScorer::default();

        assert_relative_eq!(scorer.score(&[unrelated.clone(), fly.clone()], &fly), 1.0);
        assert_relative_eq!(scorer.score(&[unrelated], &fly), 0.0);
        assert_relative_eq!(scorer.score(&[], &fly), 0.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let scorer = RelevanceScorer::default();
        assert!(!scorer.is_relevant(0.5));
        assert!(scorer.is_relevant(0.51));
    }
}
