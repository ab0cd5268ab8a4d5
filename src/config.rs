use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::diagnostics::FixtureError;

pub const CONFIG_FILE: &str = "semfix.toml";
pub const DEFAULT_OUTPUT_DIR: &str = "generated_tests";

/// Settings from `semfix.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self { output_dir: default_output_dir(), log_level: default_log_level() }
    }
}

impl Config {
    pub fn parse(content: &str, path: &Path) -> Result<Self, FixtureError> {
        toml::from_str(content)
            .map_err(|e| FixtureError::config(format!("invalid syntax: {e}"), path.to_path_buf()))
    }

    /// Load an explicitly requested config file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FixtureError::config(format!("could not read file: {e}"), path.to_path_buf()))?;
        Self::parse(&content, path)
    }

    /// Load `semfix.toml` from `dir` if present, otherwise defaults.
    pub fn discover(dir: &Path) -> Result<Self, FixtureError> {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
