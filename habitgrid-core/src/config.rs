//! Global habitgrid configuration.

use std::path::{Path, PathBuf};

use ::config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{HabitGridError, HabitGridResult};
use crate::storage::{DEFAULT_STORAGE_KEY, FileStorage};

static ENV_PREFIX: &str = "HABITGRID";

static DEFAULT_DATA_DIR: &str = "~/.local/share/habitgrid";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

/// Configuration at ~/.config/habitgrid/config.toml
///
/// Every field can also be set through a `HABITGRID_`-prefixed environment
/// variable, e.g. `HABITGRID_DATA_DIR`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HabitGridConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for HabitGridConfig {
    fn default() -> Self {
        HabitGridConfig {
            data_dir: default_data_dir(),
            storage_key: default_storage_key(),
        }
    }
}

impl HabitGridConfig {
    pub fn config_path() -> HabitGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HabitGridError::Config("Could not determine config directory".into()))?
            .join("habitgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented-out config file
    /// first if none exists.
    pub fn load() -> HabitGridResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> HabitGridResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// File values first, then `env` on top.
    fn load_with_env(path: &Path, env: Environment) -> HabitGridResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| HabitGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HabitGridError::Config(e.to_string()))
    }

    /// Data directory with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// File holding the challenge snapshot.
    pub fn storage(&self) -> FileStorage {
        FileStorage::in_dir(&self.data_path(), &self.storage_key)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HabitGridResult<()> {
        let contents = format!(
            "\
# habitgrid configuration

# Where tracked days are stored:
# data_dir = \"{}\"

# Name of the storage slot (file name without .json):
# storage_key = \"{}\"
",
            DEFAULT_DATA_DIR, DEFAULT_STORAGE_KEY
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HabitGridError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HabitGridError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
