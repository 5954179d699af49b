//! # Relogic IR
//!
//! **Formula model for relevance-logic reasoning**
//!
//! This crate holds the data every other Relogic component works on: terms,
//! formulas (additive, multiplicative/linear and quantified), arguments, and the
//! serialized forms exchanged with the natural-language translator.
//!
//! ## Core Components
//!
//! ### Terms ([`Term`])
//! - **Variables**: `x`, `y`
//! - **Constants**: `socrates`, `tweety`
//! - **Function applications**: `father(x)`
//!
//! ### Formulas ([`Formula`])
//! - **Atomic**: `bird(tweety)`, or a bare proposition `P`
//! - **Additive connectives**: ¬, ∧, ∨, → (relevant implication), ↔
//! - **Multiplicative connectives**: ⊗ (times), ⊸ (lollipop), ⅋ (par), 1, ⊥
//! - **Quantifiers**: ∀ and ∃ with an explicit bound variable
//!
//! Formulas are immutable. Each one carries the set of variable names and the set
//! of predicate names occurring beneath it, plus an identifier from the
//! [`FormulaArena`] that built it.
//!
//! ### Identity
//!
//! Two formulas are the same formula iff their canonical printed forms are
//! character-equal. `PartialEq`, `Eq` and `Hash` on [`Formula`] all go through the
//! canonical string, so formulas can be used directly as set members.
//!
//! ## Quick Start
//!
//! ```rust
//! use relogic_ir::{Argument, FormulaArena, Term};
//!
//! let arena = FormulaArena::new();
//! let bird = arena.atom("bird", vec![Term::var("x")]);
//! let fly = arena.atom("fly", vec![Term::var("x")]);
//! let rule = arena.implies(bird.clone(), fly.clone());
//!
//! let argument = Argument::new(vec![bird, rule], fly);
//! assert_eq!(argument.to_string(), "bird(x), (bird(x) → fly(x)) ⊢ fly(x)");
//! ```
//!
//! ## Architecture
//!
//! - **term**: Variables, constants and function applications
//! - **formula**: Formula kinds, operators, structural queries
//! - **arena**: Per-session formula builder
//! - **display**: The canonical printer
//! - **argument**: Premises plus conclusion
//! - **[`serialization`]**: Identifier-free trees, versioned JSON, translator input
//! - **[`util`]**: Statistics and pretty printing
//! - **error**: Error types

mod arena;
mod argument;
mod display;
mod error;
mod formula;
pub mod serialization;
mod term;
pub mod util;


pub use arena::FormulaArena;
pub use argument::Argument;
pub use error::IrError;
pub use formula::analysis::QuantifierScope;
pub use formula::{Formula, FormulaId, FormulaKind, Operator, Quantifier};
pub use serialization::{
    FormulaTree, ParsedArgument, ParsedFormula, VersionedArgument, FORMAT_VERSION,
};
pub use term::Term;
pub use util::{pretty_print_formula, FormulaStats};
