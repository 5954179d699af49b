//! relogic CLI library
//!
//! The pieces behind the `relogic` binary, usable without shelling out:
//!
//! - **[`input`]**: load translator output (`ParsedArgument` JSON) into formulas
//! - **[`commands`]**: validate, prove, countermodel and systems reports
//! - **[`batch`]**: check JSON Lines files of arguments with a progress bar
//! - **[`config`]**: `.relogicrc` discovery and loading
//! - **[`output`]**: colored terminal formatting
//!
//! ```rust,no_run
//! use relogic_cli::commands::prove_command;
//! use relogic_cli::config::Config;
//! use relogic_cli::input::load_argument;
//! use relogic_cli::cli::OutputFormat;
//! use relogic_engine::{ProofLogic, SystemKind};
//!
//! let loaded = load_argument(std::path::Path::new("argument.json")).unwrap();
//! let report = prove_command(
//!     &loaded,
//!     ProofLogic::Relevance(SystemKind::R),
//!     OutputFormat::Text,
//!     &Config::default(),
//! )
//! .unwrap();
//! print!("{}", report.body);
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod input;
pub mod output;

pub use batch::{BatchProcessor, BatchResult};
pub use config::Config;
pub use input::{load_argument, LoadedArgument};
