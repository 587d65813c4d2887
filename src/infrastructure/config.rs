//! Configuration management

use crate::error::{NtzError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "ntz.toml";

/// Default storage file name
pub const DEFAULT_STORAGE: &str = "note_storage.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the YAML note storage file
    pub storage: PathBuf,
    /// Logger spec, e.g. `warn` or `ntz=debug`
    pub log_level: String,
    /// Create an empty storage file when none exists yet
    pub create_missing: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage: PathBuf::from(DEFAULT_STORAGE),
            log_level: "warn".to_string(),
            create_missing: true,
        }
    }
}

impl Config {
    /// Load config from ntz.toml in the given directory, falling back to defaults.
    ///
    /// A relative storage path is resolved against `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);

        let mut config = match fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str::<Config>(&contents).map_err(|e| {
                NtzError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => return Err(NtzError::Io(e)),
        };

        if config.storage.is_relative() {
            config.storage = dir.join(&config.storage);
        }

        Ok(config)
    }
}
