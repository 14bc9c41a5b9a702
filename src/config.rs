//! Application configuration loading from config.toml.
//!
//! Every field has a default, so a missing config file is not an error:
//! the application starts with the defaults and logs that it did. A file
//! that exists but fails to parse is a real configuration error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory the birthday blob is stored under
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Key the birthday collection is persisted under
    #[serde(default = "default_save_key")]
    pub save_key: String,
    /// Hour of day (0-23) for the daily birthday reminder
    #[serde(default = "default_reminder_hour")]
    pub reminder_hour: u32,
    /// Seed the store with sample records when it is empty
    #[serde(default)]
    pub use_sample_data: bool,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_save_key() -> String {
    "birthdays".to_string()
}

const fn default_reminder_hour() -> u32 {
    9
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            save_key: default_save_key(),
            reminder_hour: default_reminder_hour(),
            use_sample_data: false,
        }
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns [`Error::Config`] if the file cannot be read or the TOML is
/// invalid. A file that simply does not exist is handled by
/// [`load_app_configuration`], not here.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

/// Loads the application configuration from ./config.toml, falling back
/// to defaults when the file does not exist.
///
/// # Errors
/// Returns [`Error::Config`] only for a file that exists but is
/// unreadable or malformed.
pub fn load_app_configuration() -> Result<AppConfig> {
    match fs::metadata("config.toml") {
        Ok(_) => load_config("config.toml"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No config.toml found, using default configuration");
            Ok(AppConfig::default())
        }
        Err(e) => Err(Error::Config {
            message: format!("Failed to stat config.toml: {e}"),
        }),
    }
}
