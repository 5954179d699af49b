//! Reading translator output from files or stdin

use anyhow::{Context, Result};
use relogic_ir::{Argument, FormulaArena, ParsedArgument};
use std::fs;
use std::io::Read;
use std::path::Path;

/// A parsed argument together with the arena its formulas were built in.
#[derive(Debug)]
pub struct LoadedArgument {
    pub parsed: ParsedArgument,
    pub arena: FormulaArena,
    pub argument: Argument,
}

impl LoadedArgument {
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed = ParsedArgument::from_json(json).context("Failed to parse argument JSON")?;
        let arena = FormulaArena::new();
        let argument = parsed
            .to_argument(&arena)
            .context("Failed to build formulas from argument")?;
        Ok(Self {
            parsed,
            arena,
            argument,
        })
    }

    pub fn warnings(&self, min_confidence: f64) -> Vec<String> {
        self.parsed.translation_warnings(min_confidence)
    }
}

/// Read a whole input, where `-` means stdin.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))
    }
}

pub fn load_argument(path: &Path) -> Result<LoadedArgument> {
    let content = read_source(path)?;
    LoadedArgument::from_json(&content).with_context(|| format!("Invalid argument in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODUS_PONENS: &str = r#"{"premises":[{"originalText":"Tweety is a bird","formula":{"type":"atomic","predicate":"bird","terms":[{"Var":"x"}]}},{"originalText":"Birds fly","formula":{"type":"compound","operator":"implies","operands":[{"type":"atomic","predicate":"bird","terms":[{"Var":"x"}]},{"type":"atomic","predicate":"fly","terms":[{"Var":"x"}]}]}}],"conclusion":{"originalText":"Tweety flies","formula":{"type":"atomic","predicate":"fly","terms":[{"Var":"x"}]}}}"#;

    #[test]
    fn test_load_from_json() {
        let loaded = LoadedArgument::from_json(MODUS_PONENS).unwrap();
        assert_eq!(loaded.argument.premises.len(), 2);
        assert_eq!(loaded.argument.conclusion.canonical(), "fly(x)");
        assert!(loaded.warnings(0.7).is_empty());
    }

    #[test]
    fn test_malformed_json_has_context() {
        let err = LoadedArgument::from_json("{\"premises\": 3}").unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to parse argument JSON"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_argument(Path::new("/nonexistent/argument.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read input file"));
    }
}
