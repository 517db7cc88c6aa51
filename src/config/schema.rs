use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::DEFAULT_GENERIC_EVENTS;
use crate::ranking::CategoryConvention;

/// Tool configuration.
///
/// Example YAML:
/// ```yaml
/// snapshot: /srv/kot/meet.json
/// awards:
///   male_marker: "L"
///   female_marker: "P"
/// generic_events:
///   - "Tarik Tali (Lelaki)"
///   - "Tarik Tali (Perempuan)"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Meet file location (default: ~/.config/kot-scorer/meet.json)
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    /// How participant categories map to the male/female award lists
    #[serde(default)]
    pub awards: AwardsConfig,

    /// Generic events that may be recorded; defaults to the built-in list
    #[serde(default)]
    pub generic_events: Option<Vec<String>>,
}

impl Config {
    pub fn generic_event_names(&self) -> Vec<String> {
        match &self.generic_events {
            Some(names) => names.clone(),
            None => DEFAULT_GENERIC_EVENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AwardsConfig {
    /// Category prefix for the male award list (default: "L")
    #[serde(default = "default_male_marker")]
    pub male_marker: String,

    /// Category prefix for the female award list (default: "P")
    #[serde(default = "default_female_marker")]
    pub female_marker: String,
}

impl AwardsConfig {
    pub fn convention(&self) -> CategoryConvention {
        CategoryConvention::new(&self.male_marker, &self.female_marker)
    }
}

impl Default for AwardsConfig {
    fn default() -> Self {
        Self {
            male_marker: default_male_marker(),
            female_marker: default_female_marker(),
        }
    }
}

fn default_male_marker() -> String {
    "L".to_string()
}

fn default_female_marker() -> String {
    "P".to_string()
}
