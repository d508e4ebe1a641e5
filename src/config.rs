//! Shell Configuration
//!
//! Settings read from a TOML file:
//!
//! ```toml
//! [user]
//! name = "admin"
//! computer = "host"
//! parametr = "anything"
//!
//! [paths]
//! vfs = "vfs.zip"
//! log = "log.xml"
//! start_script = "start.sh"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("invalid config '{path}': {source}")]
    Parse { path: String, source: toml::de::Error },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserSettings {
    pub name: String,
    pub computer: String,
    /// Opaque value carried along with the user section.
    #[serde(rename = "parametr", default)]
    pub extra_parameter: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PathSettings {
    pub vfs: PathBuf,
    pub log: PathBuf,
    #[serde(default)]
    pub start_script: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ShellConfig {
    pub user: UserSettings,
    pub paths: PathSettings,
}

impl ShellConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn username(&self) -> &str {
        &self.user.name
    }

    pub fn computer_name(&self) -> &str {
        &self.user.computer
    }
}
