//! relogic - command-line interface for relevance-logic argument checking
//!
//! Reads arguments produced by a natural-language translator and reports
//! validator verdicts, proofs and countermodels.

use anyhow::{Context, Result};
use clap::Parser;
use relogic_cli::cli::{Cli, Commands, ConfigCommand, OutputFormat};
use relogic_cli::commands::{
    countermodel_command, parse_logic, parse_system, prove_command, systems_command,
    validate_command, Report,
};
use relogic_cli::config::Config;
use relogic_cli::input::load_argument;
use relogic_cli::output::{enable_colors, print_error, print_header, print_success};
use relogic_cli::BatchProcessor;
use relogic_engine::ProofEngine;
use tracing_subscriber::EnvFilter;

/// Exit status for a well-formed argument that failed the check.
const EXIT_REJECTED: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("RELOGIC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = match (&cli.config, cli.no_config) {
        (_, true) => Config::default(),
        (Some(path), false) => Config::load(path)?,
        (None, false) => Config::load_default()?,
    };

    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.no_color {
        config.output.colored = false;
    }
    enable_colors(config.output.colored);
    let format = config.output.format;

    match &cli.command {
        Commands::Validate { file, system } => {
            let system = parse_system(system.as_deref(), &config)?;
            let loaded = load_argument(file)?;
            emit(validate_command(&loaded, system, format, &config)?)
        }
        Commands::Prove { file, logic } => {
            let logic = parse_logic(logic.as_deref(), &config)?;
            let loaded = load_argument(file)?;
            emit(prove_command(&loaded, logic, format, &config)?)
        }
        Commands::Countermodel { file, simple } => {
            let loaded = load_argument(file)?;
            emit(countermodel_command(&loaded, *simple, format, &config)?)
        }
        Commands::Batch { files, logic } => {
            let logic = parse_logic(logic.as_deref(), &config)?;
            let processor = BatchProcessor::new(ProofEngine::new(config.engine.clone()), logic)
                .with_progress(format == OutputFormat::Text);

            let mut all_valid = true;
            for file in files {
                let result = processor.process_file(file)?;
                all_valid &= result.invalid.is_empty() && result.failures.is_empty();
                match format {
                    OutputFormat::Text => {
                        print_header(&format!("Processing: {}", file.display()));
                        result.print_summary();
                    }
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::to_string(&result).context("Failed to serialize to JSON")?
                    ),
                }
            }
            Ok(if all_valid { 0 } else { EXIT_REJECTED })
        }
        Commands::Systems => {
            print!("{}", systems_command(format)?);
            Ok(0)
        }
        Commands::Config { command } => {
            handle_config_command(command, &config)?;
            Ok(0)
        }
    }
}

fn emit(report: Report) -> Result<i32> {
    print!("{}", report.body);
    if !report.body.ends_with('\n') {
        println!();
    }
    Ok(if report.passed { 0 } else { EXIT_REJECTED })
}

fn handle_config_command(command: &ConfigCommand, config: &Config) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{}", toml_str);
        }
        ConfigCommand::Path => {
            let path = Config::config_path();
            println!("{}", path.display());
        }
        ConfigCommand::Init => {
            let path = Config::create_default()?;
            print_success(&format!("Created config file: {}", path.display()));
        }
    }

    Ok(())
}
