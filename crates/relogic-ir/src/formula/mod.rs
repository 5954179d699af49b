//! Relevance-logic formulas.
//!
//! A [`Formula`] is either atomic (a predicate applied to terms) or built from one
//! of the fixed set of [`Operator`]s. Every formula carries the variable and
//! predicate names occurring beneath it, an identifier handed out by the
//! [`FormulaArena`](crate::FormulaArena) that built it, and an optional annotation
//! (usually the natural-language text it was translated from).
//!
//! Two formulas are the same formula iff their canonical printed forms are equal.
//! Identifiers, annotations and the exact tree shape play no part in equality.

pub(crate) mod analysis;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::IrError;
use crate::term::Term;

/// Identifier assigned by a [`FormulaArena`](crate::FormulaArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FormulaId(pub u64);

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f{}", self.0)
    }
}

/// Connectives and quantifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
    Iff,
    /// Multiplicative conjunction ⊗
    Times,
    /// Linear implication ⊸
    Lollipop,
    /// Multiplicative disjunction ⅋
    Par,
    One,
    Bottom,
    #[serde(rename = "forall")]
    ForAll,
    Exists,
}

impl Operator {
    pub const ALL: [Operator; 12] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Implies,
        Operator::Iff,
        Operator::Times,
        Operator::Lollipop,
        Operator::Par,
        Operator::One,
        Operator::Bottom,
        Operator::ForAll,
        Operator::Exists,
    ];

    /// Number of subformulas the operator takes.
    pub fn arity(&self) -> usize {
        match self {
            Operator::One | Operator::Bottom => 0,
            Operator::Not | Operator::ForAll | Operator::Exists => 1,
            Operator::And
            | Operator::Or
            | Operator::Implies
            | Operator::Iff
            | Operator::Times
            | Operator::Lollipop
            | Operator::Par => 2,
        }
    }

    pub fn is_quantifier(&self) -> bool {
        matches!(self, Operator::ForAll | Operator::Exists)
    }

    /// Resource-sensitive connectives of linear logic.
    pub fn is_multiplicative(&self) -> bool {
        matches!(
            self,
            Operator::Times | Operator::Lollipop | Operator::Par | Operator::One | Operator::Bottom
        )
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Not => "¬",
            Operator::And => "∧",
            Operator::Or => "∨",
            Operator::Implies => "→",
            Operator::Iff => "↔",
            Operator::Times => "⊗",
            Operator::Lollipop => "⊸",
            Operator::Par => "⅋",
            Operator::One => "1",
            Operator::Bottom => "⊥",
            Operator::ForAll => "∀",
            Operator::Exists => "∃",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Implies => "implies",
            Operator::Iff => "iff",
            Operator::Times => "times",
            Operator::Lollipop => "lollipop",
            Operator::Par => "par",
            Operator::One => "one",
            Operator::Bottom => "bottom",
            Operator::ForAll => "forall",
            Operator::Exists => "exists",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = IrError;

    /// Accepts the snake_case name or the printed symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Operator::ALL
            .iter()
            .copied()
            .find(|op| {
                op.name().eq_ignore_ascii_case(trimmed)
                    || op.symbol() == trimmed
                    || (*op == Operator::Iff && trimmed.eq_ignore_ascii_case("biconditional"))
            })
            .ok_or_else(|| IrError::UnknownOperator {
                name: s.to_string(),
            })
    }
}

/// Quantifier kind, recorded on quantifier nodes together with the bound variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantifier {
    #[serde(rename = "forall")]
    ForAll,
    Exists,
}

impl Quantifier {
    pub fn operator(&self) -> Operator {
        match self {
            Quantifier::ForAll => Operator::ForAll,
            Quantifier::Exists => Operator::Exists,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.operator().symbol()
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Debug, Serialize)]
pub enum FormulaKind {
    Atomic {
        predicate: String,
        terms: Vec<Term>,
    },
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
    Times(Box<Formula>, Box<Formula>),
    Lollipop(Box<Formula>, Box<Formula>),
    Par(Box<Formula>, Box<Formula>),
    One,
    Bottom,
    Quantified {
        quantifier: Quantifier,
        variable: String,
        body: Box<Formula>,
    },
}

impl FormulaKind {
    /// Operator at the root, `None` for atomic formulas.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            FormulaKind::Atomic { .. } => None,
            FormulaKind::Not(_) => Some(Operator::Not),
            FormulaKind::And(..) => Some(Operator::And),
            FormulaKind::Or(..) => Some(Operator::Or),
            FormulaKind::Implies(..) => Some(Operator::Implies),
            FormulaKind::Iff(..) => Some(Operator::Iff),
            FormulaKind::Times(..) => Some(Operator::Times),
            FormulaKind::Lollipop(..) => Some(Operator::Lollipop),
            FormulaKind::Par(..) => Some(Operator::Par),
            FormulaKind::One => Some(Operator::One),
            FormulaKind::Bottom => Some(Operator::Bottom),
            FormulaKind::Quantified { quantifier, .. } => Some(quantifier.operator()),
        }
    }

    /// Immediate subformulas in order.
    pub fn operands(&self) -> Vec<&Formula> {
        match self {
            FormulaKind::Atomic { .. } | FormulaKind::One | FormulaKind::Bottom => Vec::new(),
            FormulaKind::Not(inner) => vec![inner.as_ref()],
            FormulaKind::Quantified { body, .. } => vec![body.as_ref()],
            FormulaKind::And(l, r)
            | FormulaKind::Or(l, r)
            | FormulaKind::Implies(l, r)
            | FormulaKind::Iff(l, r)
            | FormulaKind::Times(l, r)
            | FormulaKind::Lollipop(l, r)
            | FormulaKind::Par(l, r) => vec![l.as_ref(), r.as_ref()],
        }
    }
}

/// An immutable formula. Build with a [`FormulaArena`](crate::FormulaArena).
#[derive(Clone, Debug, Serialize)]
pub struct Formula {
    id: FormulaId,
    kind: FormulaKind,
    variables: IndexSet<String>,
    predicates: IndexSet<String>,
    annotation: Option<String>,
    canonical: String,
}

impl Formula {
    /// Assemble a formula from its kind, deriving the variable/predicate sets and
    /// the canonical string.
    pub(crate) fn assemble(id: FormulaId, kind: FormulaKind) -> Self {
        let mut variables = IndexSet::new();
        let mut predicates = IndexSet::new();

        match &kind {
            FormulaKind::Atomic { predicate, terms } => {
                predicates.insert(predicate.clone());
                for term in terms {
                    term.collect_variables(&mut variables);
                }
            }
            FormulaKind::Quantified { variable, body, .. } => {
                variables.insert(variable.clone());
                variables.extend(body.variables.iter().cloned());
                predicates.extend(body.predicates.iter().cloned());
            }
            other => {
                for operand in other.operands() {
                    variables.extend(operand.variables.iter().cloned());
                    predicates.extend(operand.predicates.iter().cloned());
                }
            }
        }

        let canonical = kind.to_string();
        Formula {
            id,
            kind,
            variables,
            predicates,
            annotation: None,
            canonical,
        }
    }

    pub fn id(&self) -> FormulaId {
        self.id
    }

    pub fn kind(&self) -> &FormulaKind {
        &self.kind
    }

    pub fn operator(&self) -> Option<Operator> {
        self.kind.operator()
    }

    pub fn operands(&self) -> Vec<&Formula> {
        self.kind.operands()
    }

    /// Variable names occurring anywhere beneath this formula, bound ones included.
    pub fn variables(&self) -> &IndexSet<String> {
        &self.variables
    }

    /// Predicate names occurring anywhere beneath this formula.
    pub fn predicates(&self) -> &IndexSet<String> {
        &self.predicates
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Same formula carrying an annotation.
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// The canonical printed form. Formula identity is defined by this string.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn is_atomic(&self) -> bool {
        matches!(self.kind, FormulaKind::Atomic { .. })
    }

    /// Name of the predicate for atomic formulas.
    pub fn predicate(&self) -> Option<&str> {
        match &self.kind {
            FormulaKind::Atomic { predicate, .. } => Some(predicate),
            _ => None,
        }
    }

    /// Term count for atomic formulas.
    pub fn arity(&self) -> Option<usize> {
        match &self.kind {
            FormulaKind::Atomic { terms, .. } => Some(terms.len()),
            _ => None,
        }
    }

    /// `(antecedent, consequent)` for relevant and linear implications.
    pub fn as_implication(&self) -> Option<(&Formula, &Formula)> {
        match &self.kind {
            FormulaKind::Implies(a, c) | FormulaKind::Lollipop(a, c) => Some((a, c)),
            _ => None,
        }
    }

    pub fn as_conjunction(&self) -> Option<(&Formula, &Formula)> {
        match &self.kind {
            FormulaKind::And(l, r) => Some((l, r)),
            _ => None,
        }
    }

    pub fn as_disjunction(&self) -> Option<(&Formula, &Formula)> {
        match &self.kind {
            FormulaKind::Or(l, r) => Some((l, r)),
            _ => None,
        }
    }

    pub fn as_quantified(&self) -> Option<(Quantifier, &str, &Formula)> {
        match &self.kind {
            FormulaKind::Quantified {
                quantifier,
                variable,
                body,
            } => Some((*quantifier, variable, body)),
            _ => None,
        }
    }

    /// Whether the formula contains `other` as a subformula (itself included).
    pub fn contains(&self, other: &Formula) -> bool {
        self == other || self.operands().into_iter().any(|op| op.contains(other))
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
