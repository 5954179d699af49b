//! Canonical printer.
//!
//! This is the only place formulas are turned into text. [`Formula`](crate::Formula)
//! caches the result at construction and compares by it, so the output here is
//! bit-exact by contract:
//!
//! | Formula | Printed |
//! |---------|---------|
//! | atomic with terms | `Pred(t1, t2)` |
//! | atomic without terms | `Pred` |
//! | negation | `¬X` |
//! | binary | `(X ∧ Y)`, `(X ∨ Y)`, `(X → Y)`, `(X ↔ Y)`, `(X ⊗ Y)`, `(X ⊸ Y)`, `(X ⅋ Y)` |
//! | units | `1`, `⊥` |
//! | quantifiers | `∀v(X)`, `∃v(X)` |

use std::fmt;

use crate::formula::FormulaKind;
use crate::term::Term;

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) | Term::Const(name) => write!(f, "{}", name),
            Term::App { function, args } => {
                write!(f, "{}(", function)?;
                write_comma_separated(f, args)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for FormulaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaKind::Atomic { predicate, terms } => {
                if terms.is_empty() {
                    write!(f, "{}", predicate)
                } else {
                    write!(f, "{}(", predicate)?;
                    write_comma_separated(f, terms)?;
                    write!(f, ")")
                }
            }
            FormulaKind::Not(inner) => write!(f, "¬{}", inner),
            FormulaKind::And(l, r) => write!(f, "({} ∧ {})", l, r),
            FormulaKind::Or(l, r) => write!(f, "({} ∨ {})", l, r),
            FormulaKind::Implies(l, r) => write!(f, "({} → {})", l, r),
            FormulaKind::Iff(l, r) => write!(f, "({} ↔ {})", l, r),
            FormulaKind::Times(l, r) => write!(f, "({} ⊗ {})", l, r),
            FormulaKind::Lollipop(l, r) => write!(f, "({} ⊸ {})", l, r),
            FormulaKind::Par(l, r) => write!(f, "({} ⅋ {})", l, r),
            FormulaKind::One => write!(f, "1"),
            FormulaKind::Bottom => write!(f, "⊥"),
            FormulaKind::Quantified {
                quantifier,
                variable,
                body,
            } => write!(f, "{}{}({})", quantifier, variable, body),
        }
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", term)?;
    }
    Ok(())
}
