//! Error types for the formula model.

use thiserror::Error;

use crate::formula::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IrError {
    #[error("Operator {operator} expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operator: Operator,
        expected: usize,
        actual: usize,
    },
    #[error("Quantifier {operator} requires an explicit bound variable")]
    MissingBoundVariable { operator: Operator },
    #[error("Operator {operator} does not bind a variable (got '{variable}')")]
    UnexpectedBoundVariable { operator: Operator, variable: String },
    #[error("Unknown operator '{name}'")]
    UnknownOperator { name: String },
    #[error("Predicate name cannot be empty")]
    EmptyPredicate,
    #[error("Unsupported document version '{found}' (expected {expected})")]
    UnsupportedVersion { found: String, expected: String },
}
