// SPDX-License-Identifier: MIT

//! On-disk gateway configuration (`config.json`).
//!
//! The file is shared with the kernel: a top-level `apikey` string
//! plus one opaque section per task. Only `apikey` is interpreted
//! here; task sections pass through untouched.

use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::Task;

/// Errors from loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config must be a JSON object")]
    NotAnObject,

    #[error("config is missing the apikey entry")]
    MissingApiKey,
}

/// Immutable process-wide configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    apikey: String,
    sections: Map<String, Value>,
}

impl Config {
    /// Load and validate `config.json` from `path`.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse configuration from raw JSON text.
    pub fn from_json(raw: &str) -> Result<Config, ConfigError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(sections) = value else {
            return Err(ConfigError::NotAnObject);
        };
        let apikey = sections
            .get("apikey")
            .and_then(Value::as_str)
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();
        Ok(Config { apikey, sections })
    }

    /// The configured API key. Callers presenting this exact string are
    /// authorized.
    pub fn api_key(&self) -> &str {
        &self.apikey
    }

    /// Opaque per-task configuration section, if present.
    pub fn task_config(&self, task: Task) -> Option<&Value> {
        self.sections.get(task.as_str())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
