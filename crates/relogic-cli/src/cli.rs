//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relogic")]
#[command(author, version, about = "Check arguments under relevance logic", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides the configuration file)
    #[arg(short = 'F', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file to use instead of the default search
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Don't load configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the syntactic relevance validator on a parsed argument
    Validate {
        /// Parsed argument JSON file (`-` for stdin)
        file: PathBuf,

        /// Relevance system to validate in
        #[arg(short, long)]
        system: Option<String>,
    },

    /// Search for a proof and report the full verdict
    Prove {
        /// Parsed argument JSON file (`-` for stdin)
        file: PathBuf,

        /// Logic to prove in: classical, B, T, E or R
        #[arg(short, long)]
        logic: Option<String>,
    },

    /// Search for a model in which the premises hold and the conclusion fails
    Countermodel {
        /// Parsed argument JSON file (`-` for stdin)
        file: PathBuf,

        /// Only try the single-world construction on the first premise
        #[arg(long)]
        simple: bool,
    },

    /// Validate many arguments, one parsed-argument JSON object per line
    Batch {
        /// JSON Lines files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Logic to prove in: classical, B, T, E or R
        #[arg(short, long)]
        logic: Option<String>,
    },

    /// List the relevance systems from weakest to strongest
    Systems,

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Initialize default configuration file
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// JSON serialization of the verdict
    Json,
}
