//! Arguments: ordered premises plus one conclusion.

use indexmap::IndexSet;
use serde::Serialize;

use crate::formula::Formula;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Argument {
    pub premises: Vec<Formula>,
    pub conclusion: Formula,
}

impl Argument {
    pub fn new(premises: Vec<Formula>, conclusion: Formula) -> Self {
        Argument {
            premises,
            conclusion,
        }
    }

    /// Premises followed by the conclusion.
    pub fn formulas(&self) -> impl Iterator<Item = &Formula> {
        self.premises.iter().chain(std::iter::once(&self.conclusion))
    }

    /// Union of the variable names of every formula.
    pub fn variables(&self) -> IndexSet<String> {
        self.formulas()
            .flat_map(|f| f.variables().iter().cloned())
            .collect()
    }

    /// Union of the predicate names of every formula.
    pub fn predicates(&self) -> IndexSet<String> {
        self.formulas()
            .flat_map(|f| f.predicates().iter().cloned())
            .collect()
    }

    /// Canonical strings of all atomic subformulas, premises first.
    pub fn atom_keys(&self) -> IndexSet<String> {
        self.formulas().flat_map(|f| f.atom_keys()).collect()
    }

    /// 1-indexed premise label as used in diagnostics (`P1`, `P2`, ...).
    pub fn premise_label(index: usize) -> String {
        format!("P{}", index + 1)
    }
}

impl std::fmt::Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, premise) in self.premises.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", premise)?;
        }
        write!(f, " ⊢ {}", self.conclusion)
    }
}
