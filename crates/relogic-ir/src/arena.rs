//! Formula construction.
//!
//! Every formula is built through a [`FormulaArena`], which owns the identifier
//! counter for one reasoning session. Separate sessions use separate arenas, so
//! identifiers never leak between independent runs.
//!
//! ```rust
//! use relogic_ir::{FormulaArena, Term};
//!
//! let arena = FormulaArena::new();
//! let bird = arena.atom("bird", vec![Term::var("x")]);
//! let fly = arena.atom("fly", vec![Term::var("x")]);
//! let rule = arena.implies(bird, fly);
//!
//! assert_eq!(rule.canonical(), "(bird(x) → fly(x))");
//! assert_eq!(arena.allocated(), 3);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::IrError;
use crate::formula::{Formula, FormulaId, FormulaKind, Operator, Quantifier};
use crate::term::Term;

#[derive(Debug, Default)]
pub struct FormulaArena {
    next_id: AtomicU64,
}

impl FormulaArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of identifiers handed out since creation or the last [`reset`](Self::reset).
    pub fn allocated(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed)
    }

    /// Restart identifier allocation at zero.
    pub fn reset(&self) {
        self.next_id.store(0, Ordering::Relaxed);
    }

    fn next_id(&self) -> FormulaId {
        FormulaId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    fn make(&self, kind: FormulaKind) -> Formula {
        Formula::assemble(self.next_id(), kind)
    }

    pub fn atom(&self, predicate: impl Into<String>, terms: Vec<Term>) -> Formula {
        self.make(FormulaKind::Atomic {
            predicate: predicate.into(),
            terms,
        })
    }

    /// Propositional atom (no terms).
    pub fn prop(&self, name: impl Into<String>) -> Formula {
        self.atom(name, Vec::new())
    }

    pub fn not(&self, inner: Formula) -> Formula {
        self.make(FormulaKind::Not(Box::new(inner)))
    }

    pub fn and(&self, left: Formula, right: Formula) -> Formula {
        self.make(FormulaKind::And(Box::new(left), Box::new(right)))
    }

    pub fn or(&self, left: Formula, right: Formula) -> Formula {
        self.make(FormulaKind::Or(Box::new(left), Box::new(right)))
    }

    pub fn implies(&self, antecedent: Formula, consequent: Formula) -> Formula {
        self.make(FormulaKind::Implies(Box::new(antecedent), Box::new(consequent)))
    }

    pub fn iff(&self, left: Formula, right: Formula) -> Formula {
        self.make(FormulaKind::Iff(Box::new(left), Box::new(right)))
    }

    /// Multiplicative conjunction `A ⊗ B`.
    pub fn times(&self, left: Formula, right: Formula) -> Formula {
        self.make(FormulaKind::Times(Box::new(left), Box::new(right)))
    }

    /// Linear implication `A ⊸ B`.
    pub fn lollipop(&self, antecedent: Formula, consequent: Formula) -> Formula {
        self.make(FormulaKind::Lollipop(
            Box::new(antecedent),
            Box::new(consequent),
        ))
    }

    /// Multiplicative disjunction `A ⅋ B`.
    pub fn par(&self, left: Formula, right: Formula) -> Formula {
        self.make(FormulaKind::Par(Box::new(left), Box::new(right)))
    }

    pub fn one(&self) -> Formula {
        self.make(FormulaKind::One)
    }

    pub fn bottom(&self) -> Formula {
        self.make(FormulaKind::Bottom)
    }

    pub fn forall(&self, variable: impl Into<String>, body: Formula) -> Formula {
        self.quantified(Quantifier::ForAll, variable, body)
    }

    pub fn exists(&self, variable: impl Into<String>, body: Formula) -> Formula {
        self.quantified(Quantifier::Exists, variable, body)
    }

    pub fn quantified(
        &self,
        quantifier: Quantifier,
        variable: impl Into<String>,
        body: Formula,
    ) -> Formula {
        self.make(FormulaKind::Quantified {
            quantifier,
            variable: variable.into(),
            body: Box::new(body),
        })
    }

    /// Build a compound formula from an operator and its operands, checking arity.
    ///
    /// Quantifiers need `variable`; every other operator must not be given one.
    pub fn compound(
        &self,
        operator: Operator,
        operands: Vec<Formula>,
        variable: Option<String>,
    ) -> Result<Formula, IrError> {
        if operands.len() != operator.arity() {
            return Err(IrError::ArityMismatch {
                operator,
                expected: operator.arity(),
                actual: operands.len(),
            });
        }
        match (operator.is_quantifier(), variable) {
            (true, None) => return Err(IrError::MissingBoundVariable { operator }),
            (false, Some(variable)) => {
                return Err(IrError::UnexpectedBoundVariable { operator, variable })
            }
            (true, Some(variable)) => {
                let quantifier = if operator == Operator::ForAll {
                    Quantifier::ForAll
                } else {
                    Quantifier::Exists
                };
                let body = operands.into_iter().next().ok_or(IrError::ArityMismatch {
                    operator,
                    expected: 1,
                    actual: 0,
                })?;
                return Ok(self.quantified(quantifier, variable, body));
            }
            (false, None) => {}
        }

        let mut it = operands.into_iter();
        let formula = match operator {
            Operator::One => self.one(),
            Operator::Bottom => self.bottom(),
            Operator::Not => self.not(take(&mut it, operator)?),
            binary => {
                let left = take(&mut it, binary)?;
                let right = take(&mut it, binary)?;
                match binary {
                    Operator::And => self.and(left, right),
                    Operator::Or => self.or(left, right),
                    Operator::Implies => self.implies(left, right),
                    Operator::Iff => self.iff(left, right),
                    Operator::Times => self.times(left, right),
                    Operator::Lollipop => self.lollipop(left, right),
                    _ => self.par(left, right),
                }
            }
        };
        Ok(formula)
    }

    /// Capture-avoiding substitution of `replacement` for the free variable `var`.
    ///
    /// Occurrences under a quantifier binding `var` are left untouched. A binder
    /// that would capture a variable of `replacement` is renamed first.
    pub fn substitute(&self, formula: &Formula, var: &str, replacement: &Term) -> Formula {
        if !formula.variables().contains(var) {
            return formula.clone();
        }
        let kind = match formula.kind() {
            FormulaKind::Atomic { predicate, terms } => FormulaKind::Atomic {
                predicate: predicate.clone(),
                terms: terms
                    .iter()
                    .map(|t| t.substitute(var, replacement))
                    .collect(),
            },
            FormulaKind::Quantified { variable, .. } if variable == var => {
                return formula.clone();
            }
            FormulaKind::Quantified {
                quantifier,
                variable,
                body,
            } if replacement.contains_var(variable) && occurs_free(body, var) => {
                let fresh = fresh_variable(variable, body, replacement);
                let renamed = self.substitute(body, variable, &Term::var(fresh.clone()));
                FormulaKind::Quantified {
                    quantifier: *quantifier,
                    variable: fresh,
                    body: Box::new(self.substitute(&renamed, var, replacement)),
                }
            }
            FormulaKind::Quantified {
                quantifier,
                variable,
                body,
            } => FormulaKind::Quantified {
                quantifier: *quantifier,
                variable: variable.clone(),
                body: Box::new(self.substitute(body, var, replacement)),
            },
            FormulaKind::Not(inner) => {
                FormulaKind::Not(Box::new(self.substitute(inner, var, replacement)))
            }
            FormulaKind::One => FormulaKind::One,
            FormulaKind::Bottom => FormulaKind::Bottom,
            FormulaKind::And(l, r) => self.substitute_pair(l, r, var, replacement, FormulaKind::And),
            FormulaKind::Or(l, r) => self.substitute_pair(l, r, var, replacement, FormulaKind::Or),
            FormulaKind::Implies(l, r) => {
                self.substitute_pair(l, r, var, replacement, FormulaKind::Implies)
            }
            FormulaKind::Iff(l, r) => self.substitute_pair(l, r, var, replacement, FormulaKind::Iff),
            FormulaKind::Times(l, r) => {
                self.substitute_pair(l, r, var, replacement, FormulaKind::Times)
            }
            FormulaKind::Lollipop(l, r) => {
                self.substitute_pair(l, r, var, replacement, FormulaKind::Lollipop)
            }
            FormulaKind::Par(l, r) => self.substitute_pair(l, r, var, replacement, FormulaKind::Par),
        };
        let mut result = self.make(kind);
        if let Some(note) = formula.annotation() {
            result = result.with_annotation(note);
        }
        result
    }

    fn substitute_pair(
        &self,
        left: &Formula,
        right: &Formula,
        var: &str,
        replacement: &Term,
        rebuild: fn(Box<Formula>, Box<Formula>) -> FormulaKind,
    ) -> FormulaKind {
        rebuild(
            Box::new(self.substitute(left, var, replacement)),
            Box::new(self.substitute(right, var, replacement)),
        )
    }
}

fn occurs_free(formula: &Formula, var: &str) -> bool {
    match formula.kind() {
        FormulaKind::Atomic { terms, .. } => terms.iter().any(|t| t.contains_var(var)),
        FormulaKind::Quantified { variable, body, .. } => variable != var && occurs_free(body, var),
        other => other.operands().into_iter().any(|f| occurs_free(f, var)),
    }
}

/// `base1`, `base2`, ... until the name is unused in `body` and `replacement`.
fn fresh_variable(base: &str, body: &Formula, replacement: &Term) -> String {
    (1..)
        .map(|n| format!("{}{}", base, n))
        .find(|name| !body.variables().contains(name.as_str()) && !replacement.contains_var(name))
        .unwrap_or_else(|| base.to_string())
}

fn take(it: &mut impl Iterator<Item = Formula>, operator: Operator) -> Result<Formula, IrError> {
    it.next().ok_or(IrError::ArityMismatch {
        operator,
        expected: operator.arity(),
        actual: 0,
    })
}
