use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

/// How ages typed by the operator are turned into numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeParsing {
    /// Leading digits are taken and the rest ignored (`"20abc"` is 20).
    #[default]
    Permissive,
    /// The whole input must be a whole number.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Runtime configuration, read from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RosterConfig {
    pub age_parsing: AgeParsing,

    pub color: ColorMode,

    /// Print the full record after add, query and update.
    pub show_record_details: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            age_parsing: AgeParsing::default(),
            color: ColorMode::default(),
            show_record_details: true,
        }
    }
}

impl RosterConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RosterError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: RosterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Default location: `<platform config dir>/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }
}
