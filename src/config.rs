use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::TagPattern;
use crate::error::{AutoVersionError, Result};

/// Name of the optional per-project configuration file
pub const CONFIG_FILE_NAME: &str = "autoversion.toml";

/// Represents the configuration for auto-version.
///
/// Every field has a default, so a project without `autoversion.toml` behaves
/// like a plain npm package tagged `vMAJOR.MINOR.PATCH`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Manifest path, relative to the project directory
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Literal prefix in front of the version in tag names
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

impl Config {
    /// Manifest location resolved against `project_dir`
    pub fn manifest_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.manifest)
    }

    /// Tag pattern built from `tag_prefix`
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_prefix.clone())
            .map_err(|e| AutoVersionError::config(format!("tag_prefix: {}", e)))
    }
}

/// Loads configuration from `<project_dir>/autoversion.toml` or returns defaults.
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Config)` - If the file exists but cannot be read, parsed, or validated
pub fn load_config(project_dir: &Path) -> Result<Config> {
    let path = project_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(&path).map_err(|e| {
        AutoVersionError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = toml::from_str(&config_str).map_err(|e| {
        AutoVersionError::config(format!("Cannot parse {}: {}", path.display(), e))
    })?;

    // Reject a bad prefix before anything is written
    config.tag_pattern()?;
    Ok(config)
}
