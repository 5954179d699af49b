//! Serialized forms of formulas and arguments.
//!
//! Formulas are serialized as [`FormulaTree`]s: the bare tree without identifiers
//! or derived sets, which are recomputed when an arena rebuilds the formula.
//! This is also the shape the external natural-language translator hands over
//! (see [`ParsedArgument`]).

use serde::{Deserialize, Serialize};

use crate::argument::Argument;
use crate::arena::FormulaArena;
use crate::error::IrError;
use crate::formula::{Formula, FormulaKind, Operator};
use crate::term::Term;

/// Current serialization format version
pub const FORMAT_VERSION: &str = "1.0.0";

/// Identifier-free formula tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaTree {
    Atomic {
        predicate: String,
        #[serde(default)]
        terms: Vec<Term>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        annotation: Option<String>,
    },
    Compound {
        operator: Operator,
        #[serde(default)]
        operands: Vec<FormulaTree>,
        /// Bound variable, quantifiers only
        #[serde(default, skip_serializing_if = "Option::is_none")]
        variable: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        annotation: Option<String>,
    },
}

impl Formula {
    pub fn to_tree(&self) -> FormulaTree {
        let annotation = self.annotation().map(str::to_string);
        match self.kind() {
            FormulaKind::Atomic { predicate, terms } => FormulaTree::Atomic {
                predicate: predicate.clone(),
                terms: terms.clone(),
                annotation,
            },
            FormulaKind::Quantified {
                quantifier,
                variable,
                body,
            } => FormulaTree::Compound {
                operator: quantifier.operator(),
                operands: vec![body.to_tree()],
                variable: Some(variable.clone()),
                annotation,
            },
            other => FormulaTree::Compound {
                // Non-atomic kinds always have an operator.
                operator: other.operator().unwrap_or(Operator::One),
                operands: other.operands().into_iter().map(Formula::to_tree).collect(),
                variable: None,
                annotation,
            },
        }
    }
}

impl FormulaArena {
    /// Rebuild a formula from its tree, allocating fresh identifiers.
    pub fn build(&self, tree: &FormulaTree) -> Result<Formula, IrError> {
        let (formula, annotation) = match tree {
            FormulaTree::Atomic {
                predicate,
                terms,
                annotation,
            } => {
                if predicate.trim().is_empty() {
                    return Err(IrError::EmptyPredicate);
                }
                (self.atom(predicate.clone(), terms.clone()), annotation)
            }
            FormulaTree::Compound {
                operator,
                operands,
                variable,
                annotation,
            } => {
                let children = operands
                    .iter()
                    .map(|child| self.build(child))
                    .collect::<Result<Vec<_>, _>>()?;
                (
                    self.compound(*operator, children, variable.clone())?,
                    annotation,
                )
            }
        };
        Ok(match annotation {
            Some(note) => formula.with_annotation(note.clone()),
            None => formula,
        })
    }
}

/// Versioned wrapper for argument serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionedArgument {
    /// Format version (semver)
    pub version: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: Option<String>,
    /// Optional metadata
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
    pub premises: Vec<FormulaTree>,
    pub conclusion: FormulaTree,
}

impl VersionedArgument {
    pub fn new(argument: &Argument) -> Self {
        VersionedArgument {
            version: FORMAT_VERSION.to_string(),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            metadata: None,
            premises: argument.premises.iter().map(Formula::to_tree).collect(),
            conclusion: argument.conclusion.to_tree(),
        }
    }

    pub fn with_metadata(
        argument: &Argument,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        VersionedArgument {
            metadata: Some(metadata),
            ..Self::new(argument)
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serialize to compact JSON
    pub fn to_json_compact(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check whether this version is compatible with the current format
    pub fn is_compatible(&self) -> bool {
        self.version.split('.').next() == FORMAT_VERSION.split('.').next()
    }

    /// Rebuild the argument in `arena`.
    pub fn to_argument(&self, arena: &FormulaArena) -> Result<Argument, IrError> {
        if !self.is_compatible() {
            return Err(IrError::UnsupportedVersion {
                found: self.version.clone(),
                expected: FORMAT_VERSION.to_string(),
            });
        }
        let premises = self
            .premises
            .iter()
            .map(|p| arena.build(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Argument::new(premises, arena.build(&self.conclusion)?))
    }
}

fn full_confidence() -> f64 {
    1.0
}

/// One sentence as delivered by the natural-language translator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedFormula {
    pub original_text: String,
    pub formula: FormulaTree,
    #[serde(default)]
    pub ambiguities: Vec<String>,
    #[serde(default = "full_confidence")]
    pub confidence: f64,
}

/// Output of the translator's `parseArgument` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedArgument {
    pub premises: Vec<ParsedFormula>,
    pub conclusion: ParsedFormula,
}

impl ParsedArgument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the argument, annotating every formula with its source sentence.
    pub fn to_argument(&self, arena: &FormulaArena) -> Result<Argument, IrError> {
        let build = |parsed: &ParsedFormula| -> Result<Formula, IrError> {
            let formula = arena.build(&parsed.formula)?;
            Ok(if formula.annotation().is_none() && !parsed.original_text.is_empty() {
                formula.with_annotation(parsed.original_text.clone())
            } else {
                formula
            })
        };
        let premises = self
            .premises
            .iter()
            .map(build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Argument::new(premises, build(&self.conclusion)?))
    }

    /// Notes about sentences the translator was unsure of.
    pub fn translation_warnings(&self, min_confidence: f64) -> Vec<String> {
        let mut warnings = Vec::new();
        let labelled = self
            .premises
            .iter()
            .enumerate()
            .map(|(i, p)| (format!("Premise {}", i + 1), p))
            .chain(std::iter::once(("Conclusion".to_string(), &self.conclusion)));
        for (label, parsed) in labelled {
            if parsed.confidence < min_confidence {
                warnings.push(format!(
                    "{} translated with low confidence ({:.2}): \"{}\"",
                    label, parsed.confidence, parsed.original_text
                ));
            }
            for ambiguity in &parsed.ambiguities {
                warnings.push(format!("{} is ambiguous: {}", label, ambiguity));
            }
        }
        warnings
    }
}
