//! Configuration for alerts service module

use serde::Deserialize;
use std::path::Path;

/// Alerts service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Type used when an alert is created without one
    #[serde(default = "default_alert_type")]
    pub default_alert_type: String,

    /// Remove alerts when their owner is deleted (owner kinds may still opt out)
    #[serde(default = "default_true")]
    pub remove_alerts_on_delete: bool,

    /// Maximum length of an alert type
    #[serde(default = "default_max_type_length")]
    pub max_type_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_alert_type: default_alert_type(),
            remove_alerts_on_delete: true,
            max_type_length: default_max_type_length(),
        }
    }
}

impl Config {
    /// Load from an optional YAML file, overridden by `ALERTS_*` env vars
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Ok(polymorph::load_config(path, "ALERTS_")?)
    }
}

fn default_alert_type() -> String {
    crate::contract::DEFAULT_ALERT_TYPE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_type_length() -> usize {
    255 // varchar(255)
}
