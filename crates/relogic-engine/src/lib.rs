//! Relevance-logic reasoning over [`relogic_ir`] formulas.
//!
//! **Status**: 0.1.0
//!
//! ## Components
//! - **[`RelevanceValidator`]**: fast syntactic verdict (circularity, connectivity,
//!   quantifier scope, distribution)
//! - **Systems**: the hierarchy B ⊂ T ⊂ E ⊂ R with axioms, frame conditions and
//!   theorem schemas ([`create_system`], [`is_system_stronger`])
//! - **[`semantics`]**: Routley–Meyer models, [`evaluate`], frame checks and a
//!   model builder
//! - **[`StructuralRuleEnforcer`]**: weakening checks over proof-step sequences
//! - **[`ProofEngine`]**: relevance scoring, bounded backward-chaining proof search
//!   and full argument validation
//! - **[`CountermodelGenerator`]**: deterministic search for falsifying models
//! - **[`EngineConfig`]**: TOML configuration for search bounds and scoring
//!
//! Invalid arguments are results, not errors. [`EngineError`] covers malformed
//! input, unknown system names, unreadable configuration and exhausted search
//! budgets.
//!
//! ## Quick Start
//!
//! ```rust
//! use relogic_engine::validate;
//! use relogic_ir::{FormulaArena, Term};
//!
//! let arena = FormulaArena::new();
//! let bird = arena.atom("bird", vec![Term::var("x")]);
//! let fly = arena.atom("fly", vec![Term::var("x")]);
//!
//! let result = validate(&[bird], &fly);
//! assert!(!result.is_valid);
//! assert_eq!(
//!     result.violated_constraints,
//!     vec!["DISCONNECTED: 1 premise(s) not connected to conclusion - remove premises: P1"]
//! );
//! ```

pub mod config;
pub mod countermodel;
pub mod error;
pub mod proof;
pub mod semantics;
pub mod structural;
pub mod systems;
pub mod validator;


pub use config::{CountermodelConfig, EngineConfig, ProofConfig, RelevanceConfig};
pub use countermodel::{Countermodel, CountermodelGenerator};
pub use error::{ConfigError, EngineError, EngineResult};
pub use proof::{
    ArgumentValidation, Proof, ProofEngine, ProofLogic, ProofStep, RelevanceScorer, RuleKind,
    RuleTable,
};
pub use semantics::{
    evaluate, FrameCheckReport, FrameConditionChecker, Model, RelevanceModelBuilder, World,
    WorldId,
};
pub use structural::{ProofCheck, StructuralRuleEnforcer};
pub use systems::{
    create_system, create_system_by_name, hierarchy, is_system_stronger, Axioms,
    FrameConditions, RelevanceSystem, SystemB, SystemE, SystemKind, SystemR, SystemT,
    TheoremSchema,
};
pub use validator::{validate, RelevanceValidator, ValidationResult};
