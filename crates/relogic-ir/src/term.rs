//! Terms: variables, constants and function applications.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Var(String),
    Const(String),
    /// Function application `f(t1, ..., tn)`
    App { function: String, args: Vec<Term> },
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Term::Const(name.into())
    }

    pub fn app(function: impl Into<String>, args: Vec<Term>) -> Self {
        Term::App {
            function: function.into(),
            args,
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }

    pub fn is_const(&self) -> bool {
        matches!(self, Term::Const(_))
    }

    pub fn is_app(&self) -> bool {
        matches!(self, Term::App { .. })
    }

    /// Variable, constant or function symbol at the head of this term.
    pub fn name(&self) -> &str {
        match self {
            Term::Var(n) | Term::Const(n) => n,
            Term::App { function, .. } => function,
        }
    }

    /// Collect variable names in left-to-right order of first occurrence.
    pub fn collect_variables(&self, out: &mut IndexSet<String>) {
        match self {
            Term::Var(name) => {
                out.insert(name.clone());
            }
            Term::Const(_) => {}
            Term::App { args, .. } => {
                for arg in args {
                    arg.collect_variables(out);
                }
            }
        }
    }

    pub fn contains_var(&self, var: &str) -> bool {
        match self {
            Term::Var(name) => name == var,
            Term::Const(_) => false,
            Term::App { args, .. } => args.iter().any(|a| a.contains_var(var)),
        }
    }

    /// Replace every occurrence of the variable `var` with `replacement`.
    pub fn substitute(&self, var: &str, replacement: &Term) -> Term {
        match self {
            Term::Var(name) if name == var => replacement.clone(),
            Term::Var(_) | Term::Const(_) => self.clone(),
            Term::App { function, args } => Term::App {
                function: function.clone(),
                args: args
                    .iter()
                    .map(|a| a.substitute(var, replacement))
                    .collect(),
            },
        }
    }
}
