//! Relogic - relevance-logic reasoning engine
//!
//! This is the top-level umbrella crate that re-exports all relogic components.
//!
//! # Architecture
//!
//! - **Formula layer**: `ir` (formulas, arenas, canonical printing, serialized trees)
//! - **Reasoning layer**: `engine` (validator, B/T/E/R systems, ternary semantics,
//!   structural rules, proof search, countermodels)
//!
//! The `relogic` binary lives in the separate `relogic-cli` crate.

pub use relogic_engine as engine;
pub use relogic_ir as ir;

pub use relogic_engine::{validate, ProofEngine, ProofLogic, SystemKind, ValidationResult};
pub use relogic_ir::{Argument, Formula, FormulaArena, Term};
