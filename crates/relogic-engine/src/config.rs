//! Engine configuration.
//!
//! All fields have defaults, so a TOML file only needs the keys it changes:
//!
//! ```toml
//! default_system = "E"
//!
//! [proof]
//! max_depth = 6
//!
//! [countermodel]
//! max_worlds = 4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::systems::SystemKind;

/// Configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// System used when a caller does not name one
    pub default_system: SystemKind,

    /// Proof search bounds
    pub proof: ProofConfig,

    /// Relevance scoring
    pub relevance: RelevanceConfig,

    /// Countermodel search bounds
    pub countermodel: CountermodelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofConfig {
    /// Maximum backward-chaining depth
    pub max_depth: usize,

    /// Maximum number of goals expanded in one search
    pub max_steps: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    /// An argument is relevant iff its score exceeds this value
    pub threshold: f64,

    /// Weight of variable overlap in a premise's score
    pub variable_weight: f64,

    /// Weight of predicate overlap in a premise's score
    pub predicate_weight: f64,

    /// Translator confidence below which a warning is attached
    pub min_translation_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountermodelConfig {
    /// Upper bound on worlds per candidate model
    pub max_worlds: usize,

    /// Upper bound on valuations enumerated
    pub max_valuations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_system: SystemKind::R,
            proof: ProofConfig::default(),
            relevance: RelevanceConfig::default(),
            countermodel: CountermodelConfig::default(),
        }
    }
}

impl Default for ProofConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            max_steps: 10_000,
        }
    }
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            variable_weight: 0.6,
            predicate_weight: 0.4,
            min_translation_confidence: 0.7,
        }
    }
}

impl Default for CountermodelConfig {
    fn default() -> Self {
        Self {
            max_worlds: 8,
            max_valuations: 4096,
        }
    }
}

impl EngineConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = |field: &'static str, value: f64| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("{} is outside [0, 1]", value),
                })
            }
        };
        unit("relevance.threshold", self.relevance.threshold)?;
        unit("relevance.variable_weight", self.relevance.variable_weight)?;
        unit("relevance.predicate_weight", self.relevance.predicate_weight)?;
        unit(
            "relevance.min_translation_confidence",
            self.relevance.min_translation_confidence,
        )?;

        if self.countermodel.max_worlds < 2 {
            return Err(ConfigError::Invalid {
                field: "countermodel.max_worlds",
                reason: "candidate models need at least 2 worlds".to_string(),
            });
        }
        if self.proof.max_steps == 0 {
            return Err(ConfigError::Invalid {
                field: "proof.max_steps",
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_system, SystemKind::R);
        assert_eq!(config.proof.max_depth, 10);
        assert_eq!(config.countermodel.max_worlds, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            default_system = "E"

            [proof]
            max_depth = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.default_system, SystemKind::E);
        assert_eq!(config.proof.max_depth, 4);
        assert_eq!(config.proof.max_steps, 10_000);
        assert_eq!(config.relevance, RelevanceConfig::default());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = EngineConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let deserialized = EngineConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EngineConfig::from_toml_str("[relevance]\nthreshold = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "relevance.threshold",
                ..
            }
        ));

        let err = EngineConfig::from_toml_str("[countermodel]\nmax_worlds = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("relogic.toml");
        std::fs::write(&path, "default_system = \"T\"\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.default_system, SystemKind::T);

        let missing = EngineConfig::load(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
