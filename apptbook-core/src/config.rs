//! Global apptbook configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{ApptError, ApptResult};
use crate::source::DataSource;
use crate::view::{Direction, SortField, ViewState};

static DEFAULT_SOURCE: &str = "./data.json";

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

/// Configuration at ~/.config/apptbook/config.toml, overridable with
/// `APPTBOOK_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// File path or http(s) URL of the appointment list
    #[serde(default = "default_source")]
    pub source: String,

    #[serde(default)]
    pub sort_by: SortField,

    #[serde(default)]
    pub order_by: Direction,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            source: default_source(),
            sort_by: SortField::default(),
            order_by: Direction::default(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> ApptResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ApptError::Config("Could not determine config directory".into()))?
            .join("apptbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template there on first run.
    pub fn load() -> ApptResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be missing) and the environment.
    pub fn load_from(path: &Path) -> ApptResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("APPTBOOK"))
            .build()
            .map_err(|e| ApptError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ApptError::Config(e.to_string()))
    }

    pub fn data_source(&self) -> ApptResult<DataSource> {
        DataSource::parse(&self.source)
    }

    pub fn view_state(&self) -> ViewState {
        ViewState::new("", self.sort_by, self.order_by)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ApptResult<()> {
        let contents = format!(
            "\
# apptbook configuration

# Where the appointment list is loaded from (file path or http(s) URL):
# source = \"{}\"

# Initial ordering (petName, ownerName, aptNotes, date):
# sort_by = \"petName\"

# Initial direction (asc or desc):
# order_by = \"asc\"
",
            DEFAULT_SOURCE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApptError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ApptError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn to_toml(&self) -> ApptResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApptError::Config(e.to_string()))
    }
}
