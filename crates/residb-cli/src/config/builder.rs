use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::debug;

/// Builds the effective configuration: defaults, then the config file, then flags.
///
/// An explicit `--config` file must exist. Without one, the per-user file is read if present.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => match FileConfig::default_path() {
            Some(path) if path.is_file() => FileConfig::from_file(&path)?,
            _ => {
                debug!("No configuration file found, using defaults.");
                FileConfig::default()
            }
        },
    };

    merge(file_config, cli.database.as_deref())
}

fn merge(file_config: FileConfig, database: Option<&Path>) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let config = AppConfig {
        database: database.map(Path::to_path_buf).or(file_config.database),
        charge_set: file_config.charge_set.unwrap_or(defaults.charge_set),
        atom_type_set: file_config.atom_type_set.unwrap_or(defaults.atom_type_set),
        strict: file_config.strict.unwrap_or(defaults.strict),
    };

    for (key, value) in [
        ("charge-set", &config.charge_set),
        ("atom-type-set", &config.atom_type_set),
    ] {
        if value.trim().is_empty() {
            return Err(CliError::Config(format!("`{}` cannot be empty.", key)));
        }
    }
    Ok(config)
}
