//! Formula statistics.

use serde::Serialize;

use crate::formula::{Formula, FormulaKind};

/// Statistics about a formula
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormulaStats {
    /// Total number of nodes in the formula tree
    pub node_count: usize,
    /// Maximum depth of the formula tree
    pub max_depth: usize,
    /// Number of atomic occurrences
    pub atom_count: usize,
    /// Number of quantifiers (exists + forall)
    pub quantifier_count: usize,
    /// Additive connectives (¬, ∧, ∨, →, ↔)
    pub additive_op_count: usize,
    /// Multiplicative connectives and units (⊗, ⊸, ⅋, 1, ⊥)
    pub multiplicative_op_count: usize,
    /// Distinct variable names
    pub variable_count: usize,
    /// Distinct predicate names
    pub predicate_count: usize,
}

impl FormulaStats {
    pub fn compute(formula: &Formula) -> Self {
        let mut stats = FormulaStats {
            variable_count: formula.variables().len(),
            predicate_count: formula.predicates().len(),
            ..Default::default()
        };
        stats.max_depth = Self::compute_recursive(formula, &mut stats, 0);
        stats
    }

    fn compute_recursive(formula: &Formula, stats: &mut FormulaStats, depth: usize) -> usize {
        stats.node_count += 1;
        match formula.kind() {
            FormulaKind::Atomic { .. } => stats.atom_count += 1,
            FormulaKind::Quantified { .. } => stats.quantifier_count += 1,
            FormulaKind::Not(_)
            | FormulaKind::And(..)
            | FormulaKind::Or(..)
            | FormulaKind::Implies(..)
            | FormulaKind::Iff(..) => stats.additive_op_count += 1,
            FormulaKind::Times(..)
            | FormulaKind::Lollipop(..)
            | FormulaKind::Par(..)
            | FormulaKind::One
            | FormulaKind::Bottom => stats.multiplicative_op_count += 1,
        }

        formula
            .operands()
            .into_iter()
            .map(|op| Self::compute_recursive(op, stats, depth + 1))
            .max()
            .unwrap_or(depth)
    }
}

/// Indented tree rendering, one node per line, for debugging output.
pub fn pretty_print_formula(formula: &Formula) -> String {
    let mut out = String::new();
    pretty_print_recursive(formula, 0, &mut out);
    out
}

fn pretty_print_recursive(formula: &Formula, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match formula.kind() {
        FormulaKind::Atomic { .. } => out.push_str(&format!("{}{}\n", pad, formula)),
        FormulaKind::Quantified {
            quantifier,
            variable,
            ..
        } => out.push_str(&format!("{}{}{}\n", pad, quantifier, variable)),
        other => {
            let label = other.operator().map(|op| op.symbol()).unwrap_or("?");
            out.push_str(&format!("{}{}\n", pad, label));
        }
    }
    for operand in formula.operands() {
        pretty_print_recursive(operand, indent + 1, out);
    }
}
