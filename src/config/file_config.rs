//! Configuration file support for bibweb.
//!
//! An optional TOML file supplies defaults for directories that can also be
//! given on the command line:
//!
//! ```toml
//! [site]
//! template_dir = "template"
//! output_dir = "public"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file structure
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Site generation defaults
    #[serde(default)]
    pub site: SiteSection,
}

/// The `[site]` section
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigFileError::Parse(e.to_string()))
    }
}

/// Locate a configuration file in the default locations: `bibweb.toml` in the
/// working directory, then `config.toml` in the user's bibweb config
/// directory.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("bibweb.toml");
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("bibweb").join("config.toml");
    user.exists().then_some(user)
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
