//! Configuration for reports service module

use serde::Deserialize;
use std::path::Path;

/// Reports service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Remove reports when their owner is deleted (owner kinds may still opt out)
    #[serde(default = "default_true")]
    pub remove_reports_on_delete: bool,

    /// Maximum length of a report item type and title
    #[serde(default = "default_max_item_length")]
    pub max_item_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remove_reports_on_delete: true,
            max_item_length: default_max_item_length(),
        }
    }
}

impl Config {
    /// Load from an optional YAML file, overridden by `REPORTS_*` env vars
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Ok(polymorph::load_config(path, "REPORTS_")?)
    }
}

fn default_true() -> bool {
    true
}

fn default_max_item_length() -> usize {
    255 // varchar(255)
}
