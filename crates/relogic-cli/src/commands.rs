//! Subcommand implementations
//!
//! Each command renders its report into a `String` so the binary only decides
//! where it goes.

use anyhow::{Context, Result};
use relogic_engine::{
    create_system, hierarchy, CountermodelGenerator, ProofEngine, ProofLogic, RelevanceValidator,
    SystemKind,
};
use serde_json::json;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::input::LoadedArgument;
use crate::output::{
    format_argument, format_argument_validation, format_countermodel, format_system,
    format_validation,
};

pub fn parse_system(name: Option<&str>, config: &Config) -> Result<SystemKind> {
    match name {
        Some(name) => name
            .parse()
            .with_context(|| format!("Invalid --system value '{}'", name)),
        None => Ok(config.engine.default_system),
    }
}

pub fn parse_logic(name: Option<&str>, config: &Config) -> Result<ProofLogic> {
    match name {
        Some(name) => name
            .parse()
            .with_context(|| format!("Invalid --logic value '{}'", name)),
        None => Ok(ProofLogic::Relevance(config.engine.default_system)),
    }
}

fn to_json(value: &serde_json::Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}

/// Outcome of a command: the rendered report and whether the argument passed.
pub struct Report {
    pub body: String,
    pub passed: bool,
}

pub fn validate_command(
    loaded: &LoadedArgument,
    system: SystemKind,
    format: OutputFormat,
    config: &Config,
) -> Result<Report> {
    let argument = &loaded.argument;
    let result = RelevanceValidator::new(system).validate(&argument.premises, &argument.conclusion);
    let warnings = loaded.warnings(config.engine.relevance.min_translation_confidence);
    debug!(%system, valid = result.is_valid, "validated argument");

    let body = match format {
        OutputFormat::Json => to_json(&json!({
            "system": system,
            "isValid": result.is_valid,
            "violatedConstraints": result.violated_constraints,
            "warnings": warnings,
        }))?,
        OutputFormat::Text => {
            let mut out = format_argument(argument);
            out.push_str(&format_validation(&system.to_string(), &result));
            for warning in &warnings {
                out.push_str(&format!("  warning: {}\n", warning));
            }
            out
        }
    };
    Ok(Report {
        body,
        passed: result.is_valid,
    })
}

pub fn prove_command(
    loaded: &LoadedArgument,
    logic: ProofLogic,
    format: OutputFormat,
    config: &Config,
) -> Result<Report> {
    let engine = ProofEngine::new(config.engine.clone());
    let mut result = engine.validate_argument(&loaded.arena, &loaded.argument, logic);
    result
        .warnings
        .extend(loaded.warnings(config.engine.relevance.min_translation_confidence));

    let body = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&result).context("Failed to serialize to JSON")?
        }
        OutputFormat::Text => {
            let mut out = format_argument(&loaded.argument);
            out.push_str(&format_argument_validation(
                &logic.to_string(),
                &result,
                config.output.show_proofs,
            ));
            out
        }
    };
    Ok(Report {
        body,
        passed: result.is_valid,
    })
}

/// `passed` is true when a countermodel was found.
pub fn countermodel_command(
    loaded: &LoadedArgument,
    simple: bool,
    format: OutputFormat,
    config: &Config,
) -> Result<Report> {
    let generator = CountermodelGenerator::new(config.engine.countermodel.clone());
    let argument = &loaded.argument;
    let countermodel = if simple {
        let premise = argument
            .premises
            .first()
            .context("The single-world construction needs at least one premise")?;
        generator.generate_simple_counterexample(premise, &argument.conclusion)
    } else {
        generator.find_countermodel(argument)
    };

    let body = match (format, &countermodel) {
        (OutputFormat::Json, _) => to_json(&json!({ "countermodel": countermodel }))?,
        (OutputFormat::Text, Some(cm)) => format_countermodel(cm),
        (OutputFormat::Text, None) => format!(
            "No countermodel found within {} worlds; this does not establish validity\n",
            config.engine.countermodel.max_worlds
        ),
    };
    Ok(Report {
        body,
        passed: countermodel.is_some(),
    })
}

pub fn systems_command(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let systems: Vec<_> = hierarchy()
                .into_iter()
                .map(|kind| {
                    let system = create_system(kind);
                    json!({
                        "name": kind,
                        "description": kind.description(),
                        "axioms": system.axioms().names(),
                        "frameConditions": system.frame_conditions().names(),
                        "theorems": system.schemas().iter().map(|s| s.name()).collect::<Vec<_>>(),
                    })
                })
                .collect();
            to_json(&json!(systems))
        }
        OutputFormat::Text => Ok(hierarchy()
            .into_iter()
            .map(|kind| format_system(create_system(kind).as_ref()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
