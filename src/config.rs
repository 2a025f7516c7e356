//! Configuration file (schemaforge.toml)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sql::{Dialect, GenerateOptions, ParseMode, ParseOptions};

pub const CONFIG_FILE: &str = "schemaforge.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target dialect label, or `auto` to detect it from the input
    pub dialect: String,

    /// Fail on malformed statements and unmodeled constraints
    pub strict: bool,

    /// Link `<table>_id` columns to matching tables
    pub infer_relationships: bool,

    /// Emit captured DEFAULT values in generated SQL
    pub with_defaults: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: Dialect::default().label().to_string(),
            strict: false,
            infer_relationships: true,
            with_defaults: false,
        }
    }
}

impl Config {
    /// Load config from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Load config from TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save config to TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let toml =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, toml).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Dialect to generate for. `auto` inspects `sql`, unknown labels fall back to Postgres.
    pub fn dialect_for(&self, sql: &str) -> Dialect {
        if self.dialect.eq_ignore_ascii_case("auto") {
            let detected = Dialect::detect(sql).unwrap_or_default();
            tracing::debug!(dialect = %detected, "detected dialect");
            return detected;
        }
        Dialect::resolve(&self.dialect)
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            mode: if self.strict {
                ParseMode::Strict
            } else {
                ParseMode::Lenient
            },
            infer_relationships: self.infer_relationships,
            ..ParseOptions::default()
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            with_defaults: self.with_defaults,
        }
    }
}

/// Config error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
