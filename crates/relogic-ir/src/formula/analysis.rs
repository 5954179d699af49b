//! Structural queries over formulas (atoms, subformulas, scopes, instances).

use indexmap::IndexSet;

use crate::term::Term;

use super::{Formula, FormulaKind, Quantifier};

/// A quantifier occurrence: its kind and the variable it binds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuantifierScope {
    pub quantifier: Quantifier,
    pub variable: String,
}

impl std::fmt::Display for QuantifierScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.quantifier, self.variable)
    }
}

impl Formula {
    /// Atomic subformulas, deduplicated by canonical form, in order of first occurrence.
    pub fn atoms(&self) -> Vec<&Formula> {
        let mut seen = IndexSet::new();
        let mut out = Vec::new();
        self.collect_atoms(&mut seen, &mut out);
        out
    }

    fn collect_atoms<'a>(&'a self, seen: &mut IndexSet<&'a str>, out: &mut Vec<&'a Formula>) {
        if self.is_atomic() {
            if seen.insert(self.canonical()) {
                out.push(self);
            }
            return;
        }
        for operand in self.operands() {
            operand.collect_atoms(seen, out);
        }
    }

    /// Canonical strings of the atomic subformulas.
    pub fn atom_keys(&self) -> IndexSet<String> {
        self.atoms()
            .into_iter()
            .map(|a| a.canonical().to_string())
            .collect()
    }

    /// All subformulas in pre-order, this formula first.
    pub fn subformulas(&self) -> Vec<&Formula> {
        let mut out = vec![self];
        for operand in self.operands() {
            out.extend(operand.subformulas());
        }
        out
    }

    /// Height of the formula tree; atoms and units have depth 0.
    pub fn depth(&self) -> usize {
        self.operands()
            .into_iter()
            .map(|op| op.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Quantifier scopes in pre-order.
    pub fn quantifier_scopes(&self) -> Vec<QuantifierScope> {
        let mut scopes = Vec::new();
        for sub in self.subformulas() {
            if let FormulaKind::Quantified {
                quantifier,
                variable,
                ..
            } = sub.kind()
            {
                scopes.push(QuantifierScope {
                    quantifier: *quantifier,
                    variable: variable.clone(),
                });
            }
        }
        scopes
    }

    /// Whether the two formulas have a common atomic subformula.
    pub fn shares_atom_with(&self, other: &Formula) -> bool {
        let mine = self.atom_keys();
        other
            .atoms()
            .into_iter()
            .any(|a| mine.contains(a.canonical()))
    }

    /// Whether some atomic subformula of each has the same predicate name and arity.
    pub fn shares_atomic_signature_with(&self, other: &Formula) -> bool {
        let theirs = other.atoms();
        self.atoms().into_iter().any(|a| {
            theirs
                .iter()
                .any(|b| a.predicate() == b.predicate() && a.arity() == b.arity())
        })
    }

    pub fn shares_variable_with(&self, other: &Formula) -> bool {
        self.variables()
            .iter()
            .any(|v| other.variables().contains(v))
    }

    pub fn shares_predicate_with(&self, other: &Formula) -> bool {
        self.predicates()
            .iter()
            .any(|p| other.predicates().contains(p))
    }

    /// Relevant connection between two formulas: a common atom or a common variable.
    pub fn shares_content_with(&self, other: &Formula) -> bool {
        self.shares_atom_with(other) || self.shares_variable_with(other)
    }

    /// If `instance` is this formula with the free variable `var` replaced by a
    /// single term, return that term.
    ///
    /// Returns `None` when the shapes differ or `var` would have to stand for two
    /// different terms. When `var` does not occur freely, an identical formula
    /// yields the variable itself.
    pub fn instance_witness(&self, var: &str, instance: &Formula) -> Option<Term> {
        let mut witness = None;
        if match_instance(self, instance, var, &mut witness) {
            Some(witness.unwrap_or_else(|| Term::var(var)))
        } else {
            None
        }
    }
}

fn match_instance(pattern: &Formula, target: &Formula, var: &str, witness: &mut Option<Term>) -> bool {
    match (pattern.kind(), target.kind()) {
        (
            FormulaKind::Atomic { predicate, terms },
            FormulaKind::Atomic {
                predicate: other_predicate,
                terms: other_terms,
            },
        ) => {
            predicate == other_predicate
                && terms.len() == other_terms.len()
                && terms
                    .iter()
                    .zip(other_terms)
                    .all(|(p, t)| match_term(p, t, var, witness))
        }
        (
            FormulaKind::Quantified {
                quantifier,
                variable,
                body,
            },
            FormulaKind::Quantified {
                quantifier: other_quantifier,
                variable: other_variable,
                body: other_body,
            },
        ) => {
            if quantifier != other_quantifier || variable != other_variable {
                return false;
            }
            if variable == var {
                body == other_body
            } else {
                match_instance(body, other_body, var, witness)
            }
        }
        (FormulaKind::One, FormulaKind::One) | (FormulaKind::Bottom, FormulaKind::Bottom) => true,
        (left, right) if left.operator() == right.operator() => {
            let lhs = left.operands();
            let rhs = right.operands();
            lhs.len() == rhs.len()
                && lhs
                    .into_iter()
                    .zip(rhs)
                    .all(|(p, t)| match_instance(p, t, var, witness))
        }
        _ => false,
    }
}

fn match_term(pattern: &Term, target: &Term, var: &str, witness: &mut Option<Term>) -> bool {
    match pattern {
        Term::Var(name) if name == var => match witness {
            Some(bound) => bound == target,
            None => {
                *witness = Some(target.clone());
                true
            }
        },
        Term::Var(_) | Term::Const(_) => pattern == target,
        Term::App { function, args } => match target {
            Term::App {
                function: other_function,
                args: other_args,
            } => {
                function == other_function
                    && args.len() == other_args.len()
                    && args
                        .iter()
                        .zip(other_args)
                        .all(|(p, t)| match_term(p, t, var, witness))
            }
            _ => false,
        },
    }
}
