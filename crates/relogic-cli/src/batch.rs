//! Batch processing mode for the relogic CLI

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use relogic_engine::{ProofEngine, ProofLogic};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::input::LoadedArgument;
use crate::output::{print_error, print_info, print_success};

pub struct BatchProcessor {
    engine: ProofEngine,
    logic: ProofLogic,
    show_progress: bool,
}

impl BatchProcessor {
    pub fn new(engine: ProofEngine, logic: ProofLogic) -> Self {
        Self {
            engine,
            logic,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Process a JSON Lines file: one parsed argument per line, `#` comments and
    /// blank lines skipped.
    pub fn process_file(&self, input_path: &Path) -> Result<BatchResult> {
        let content = fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read file: {}", input_path.display()))?;

        let entries: Vec<(usize, &str)> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty() && !line.trim().starts_with('#'))
            .map(|(i, line)| (i + 1, line))
            .collect();

        self.process_entries(&entries)
    }

    pub fn process_entries(&self, entries: &[(usize, &str)]) -> Result<BatchResult> {
        let pb = if self.show_progress {
            ProgressBar::new(entries.len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("##-"),
        );

        let mut result = BatchResult {
            total: entries.len(),
            ..BatchResult::default()
        };
        for (line, json) in entries {
            pb.set_message(format!("Checking line {}", line));

            match self.process_one(json) {
                Ok(true) => result.valid += 1,
                Ok(false) => result.invalid.push(*line),
                Err(e) => result.failures.push((*line, format!("{:#}", e))),
            }

            pb.inc(1);
        }

        pb.finish_with_message("Done");
        debug!(
            total = result.total,
            valid = result.valid,
            failures = result.failures.len(),
            "batch finished"
        );
        Ok(result)
    }

    fn process_one(&self, json: &str) -> Result<bool> {
        let loaded = LoadedArgument::from_json(json)?;
        let verdict = self
            .engine
            .validate_argument(&loaded.arena, &loaded.argument, self.logic);
        Ok(verdict.is_valid)
    }
}

#[derive(Debug, Default, Serialize)]
pub struct BatchResult {
    pub total: usize,
    pub valid: usize,
    /// Line numbers of arguments judged invalid
    pub invalid: Vec<usize>,
    /// Line numbers and errors of entries that could not be checked
    pub failures: Vec<(usize, String)>,
}

impl BatchResult {
    pub fn print_summary(&self) {
        println!("\nBatch Summary:");
        println!("  Total: {}", self.total);
        print_success(&format!("Valid: {}", self.valid));

        if !self.invalid.is_empty() {
            let lines: Vec<String> = self.invalid.iter().map(|l| l.to_string()).collect();
            print_info(&format!(
                "Invalid: {} (lines {})",
                self.invalid.len(),
                lines.join(", ")
            ));
        }

        if !self.failures.is_empty() {
            print_error(&format!("Failures: {}", self.failures.len()));
            println!("\nFailed entries:");
            for (line_num, error) in &self.failures {
                println!("  Line {}: {}", line_num, error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relogic_engine::SystemKind;
    use std::io::Write;

    const VALID: &str = r#"{"premises":[{"originalText":"a","formula":{"type":"atomic","predicate":"bird","terms":[{"Var":"x"}]}},{"originalText":"b","formula":{"type":"compound","operator":"implies","operands":[{"type":"atomic","predicate":"bird","terms":[{"Var":"x"}]},{"type":"atomic","predicate":"fly","terms":[{"Var":"x"}]}]}}],"conclusion":{"originalText":"c","formula":{"type":"atomic","predicate":"fly","terms":[{"Var":"x"}]}}}"#;
    const UNRELATED: &str = r#"{"premises":[{"originalText":"a","formula":{"type":"atomic","predicate":"P","terms":[{"Const":"a"}]}}],"conclusion":{"originalText":"c","formula":{"type":"atomic","predicate":"Q","terms":[{"Const":"b"}]}}}"#;

    fn processor() -> BatchProcessor {
        BatchProcessor::new(ProofEngine::default(), ProofLogic::Relevance(SystemKind::R))
            .with_progress(false)
    }

    #[test]
    fn test_process_file_counts() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# modus ponens, then an unrelated pair").unwrap();
        writeln!(file, "{}", VALID).unwrap();
        writeln!(file).unwrap();
        writeln!(file, "{}", UNRELATED).unwrap();
        writeln!(file, "not json").unwrap();

        let result = processor().process_file(file.path()).unwrap();
        assert_eq!(result.total, 3);
        assert_eq!(result.valid, 1);
        assert_eq!(result.invalid, vec![4]);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, 5);
        assert!(result.failures[0].1.starts_with("Failed to parse argument JSON"));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(processor()
            .process_file(Path::new("/nonexistent/batch.jsonl"))
            .is_err());
    }
}
