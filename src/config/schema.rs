use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::ScoringConfig;

/// Number of matches returned by `rank` when no limit is given.
pub const DEFAULT_LIMIT: usize = 20;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON file holding jobs and profiles (defaults to ~/.config/job-match/data.json)
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub default_limit: Option<usize>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            default_limit: Some(DEFAULT_LIMIT),
            scoring: Some(ScoringConfig::default()),
        }
    }
}

impl Config {
    pub fn limit(&self) -> usize {
        self.default_limit.unwrap_or(DEFAULT_LIMIT)
    }
}
