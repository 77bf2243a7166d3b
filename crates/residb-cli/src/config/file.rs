use crate::error::{CliError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "residb.toml";

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub charge_set: Option<String>,
    pub atom_type_set: Option<String>,
    pub strict: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;

        // A relative database directory is relative to the file that names it.
        if let (Some(database), Some(parent)) = (config.database.as_mut(), path.parent()) {
            if database.is_relative() {
                *database = parent.join(&*database);
            }
        }
        Ok(config)
    }

    /// Location of the per-user config file, whether or not it exists.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "residb", "residb")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
