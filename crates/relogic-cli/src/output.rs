//! Colored output formatting for the relogic CLI

use colored::*;
use relogic_engine::{ArgumentValidation, Countermodel, RelevanceSystem, ValidationResult};
use relogic_ir::Argument;
use std::fmt::Write;

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

pub fn print_header(title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "=".repeat(title.chars().count()).cyan());
}

pub fn enable_colors(enabled: bool) {
    colored::control::set_override(enabled);
}

fn verdict(valid: bool) -> ColoredString {
    if valid {
        "✓ valid".green().bold()
    } else {
        "✗ invalid".red().bold()
    }
}

pub fn format_argument(argument: &Argument) -> String {
    let mut out = String::new();
    for (i, premise) in argument.premises.iter().enumerate() {
        let _ = writeln!(out, "  P{}: {}", i + 1, premise);
    }
    let _ = writeln!(out, "  ⊢  {}", argument.conclusion);
    out
}

pub fn format_validation(system: &str, result: &ValidationResult) -> String {
    let mut out = format!("Validator ({}): {}\n", system, verdict(result.is_valid));
    for tag in &result.violated_constraints {
        let _ = writeln!(out, "  - {}", tag.yellow());
    }
    out
}

pub fn format_argument_validation(
    logic: &str,
    result: &ArgumentValidation,
    show_proof: bool,
) -> String {
    let mut out = format!("Verdict ({}): {}\n", logic, verdict(result.is_valid));
    let relevance = format!("{:.2}", result.relevance_score);
    let _ = writeln!(
        out,
        "  Relevance score: {}",
        if result.has_relevance {
            relevance.green()
        } else {
            relevance.red()
        }
    );
    for error in &result.errors {
        let _ = writeln!(out, "  {} {}", "error:".red(), error);
    }
    for warning in &result.warnings {
        let _ = writeln!(out, "  {} {}", "warning:".yellow(), warning);
    }
    if show_proof {
        if let Some(proof) = &result.proof {
            let _ = writeln!(out, "\nProof:");
            out.push_str(&proof.to_string());
        }
    }
    if let Some(countermodel) = &result.counterexample {
        let _ = writeln!(out);
        out.push_str(&format_countermodel(countermodel));
    }
    out
}

pub fn format_countermodel(countermodel: &Countermodel) -> String {
    let mut out = countermodel.explain();
    out.push('\n');
    out
}

pub fn format_system(system: &dyn RelevanceSystem) -> String {
    let kind = system.kind();
    let schemas: Vec<&str> = system.schemas().iter().map(|s| s.name()).collect();
    format!(
        "{}  {}\n   axioms: {}\n   frame:  {}\n   theorems: {}\n",
        kind.to_string().cyan().bold(),
        kind.description(),
        system.axioms().names().join(", "),
        system.frame_conditions().names().join(", "),
        schemas.join(", ")
    )
}
