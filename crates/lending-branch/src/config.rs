//! # Branch Configuration
//!
//! [`BranchConfig`] is assembled in layers: defaults, then an optional JSON file named by
//! `LENDING_CONFIG`, then individual environment overrides.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `LENDING_CONFIG` | path to a JSON file with any subset of the fields |
//! | `LENDING_BRANCH_NAME` | `branch_name` |
//! | `LENDING_CHANNEL_CAPACITY` | `channel_capacity` |
//! | `LENDING_LOG` | `log_filter` (used when `RUST_LOG` is unset) |
//!
//! ```json
//! {
//!   "branch_name": "Riverside",
//!   "catalog": [{"state": "Available", "call_number": "123", "due_date": 12202013}]
//! }
//! ```

use crate::model::ResourceRecord;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_CONFIG_FILE: &str = "LENDING_CONFIG";
pub const ENV_BRANCH_NAME: &str = "LENDING_BRANCH_NAME";
pub const ENV_CHANNEL_CAPACITY: &str = "LENDING_CHANNEL_CAPACITY";
pub const ENV_LOG_FILTER: &str = "LENDING_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("channel capacity must be greater than zero")]
    ZeroCapacity,
}

/// Settings for one lending branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchConfig {
    /// Shown in logs.
    pub branch_name: String,
    /// Request queue depth of the desk actor.
    pub channel_capacity: usize,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Records catalogued when the branch starts.
    pub catalog: Vec<ResourceRecord>,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            branch_name: "Main Branch".to_string(),
            channel_capacity: 32,
            log_filter: "info".to_string(),
            catalog: Vec::new(),
        }
    }
}

impl BranchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(ENV_CONFIG_FILE) {
            Some(path) => {
                let path = PathBuf::from(path);
                let json = std::fs::read_to_string(&path)
                    .map_err(|source| ConfigError::Read { path, source })?;
                serde_json::from_str(&json)?
            }
            None => Self::default(),
        };

        if let Some(name) = lookup(ENV_BRANCH_NAME) {
            config.branch_name = name;
        }
        if let Some(raw) = lookup(ENV_CHANNEL_CAPACITY) {
            config.channel_capacity = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_CHANNEL_CAPACITY,
                value: raw.clone(),
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG_FILTER) {
            config.log_filter = filter;
        }

        config.validate()
    }

    fn validate(self) -> Result<Self, ConfigError> {
        // tokio's bounded channel panics on a zero capacity
        if self.channel_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = BranchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, BranchConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn test_environment_overrides() {
        let config = BranchConfig::from_lookup(lookup(&[
            (ENV_BRANCH_NAME, "Riverside"),
            (ENV_CHANNEL_CAPACITY, " 8 "),
            (ENV_LOG_FILTER, "lending_branch=debug"),
        ]))
        .unwrap();
        assert_eq!(config.branch_name, "Riverside");
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.log_filter, "lending_branch=debug");
    }

    #[test]
    fn test_invalid_capacity_is_rejected() {
        let err = BranchConfig::from_lookup(lookup(&[(ENV_CHANNEL_CAPACITY, "lots")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: ENV_CHANNEL_CAPACITY, ref value } if value == "lots"
        ));

        let err = BranchConfig::from_lookup(lookup(&[(ENV_CHANNEL_CAPACITY, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_json_catalog_and_partial_fields() {
        let config = BranchConfig::from_json(
            r#"{
                "branch_name": "Riverside",
                "catalog": [
                    {"state": "Available", "call_number": "123", "due_date": 12202013},
                    {"state": "CheckedOut", "call_number": "QA76", "due_date": 0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.branch_name, "Riverside");
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(
            config.catalog,
            [
                ResourceRecord::available("123", 12202013),
                ResourceRecord::checked_out("QA76", 0),
            ]
        );
    }

    #[test]
    fn test_json_with_unknown_state_fails() {
        let err = BranchConfig::from_json(
            r#"{"catalog": [{"state": "Lost", "call_number": "123", "due_date": 0}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let err = BranchConfig::from_lookup(lookup(&[(
            ENV_CONFIG_FILE,
            "/nonexistent/lending-branch.json",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lending-branch.json"));
    }
}
