use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::AutofieldError;

const CONFIG_DIR: &str = "autofield";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a message to show the user when the file was unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

impl ConfigResult {
    fn defaults(warning: Option<String>) -> Self {
        Self {
            config: Config::default(),
            warning,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from `explicit`, or from the default location when `None`.
///
/// A missing default file is not an error; a missing explicit file is reported.
pub fn load_config(explicit: Option<&Path>) -> ConfigResult {
    match explicit {
        Some(path) => load_config_from_path(path, true),
        None => match config_path() {
            Some(path) => load_config_from_path(&path, false),
            None => ConfigResult::defaults(None),
        },
    }
}

pub fn load_config_from_path(path: &Path, required: bool) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            return ConfigResult::defaults(None);
        }
        Err(e) => {
            log::warn!("Could not read config {}: {}", path.display(), e);
            return ConfigResult::defaults(Some(format!(
                "Could not read config {}: {}. Using defaults.",
                path.display(),
                e
            )));
        }
    };

    match parse_config_toml(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path.display(), e);
            ConfigResult::defaults(Some(format!(
                "{} in {}. Using defaults.",
                e,
                path.display()
            )))
        }
    }
}

pub fn parse_config_toml(content: &str) -> Result<Config, AutofieldError> {
    toml::from_str::<Config>(content).map_err(|e| AutofieldError::InvalidConfig(e.message().to_string()))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
