pub mod export;
pub mod list;
pub mod show;
pub mod validate;

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use residb::core::table::registry::DefinitionTable;
use std::borrow::Cow;
use tracing::info;

/// Loads the table the configuration points at: a declaration directory, or the built-in set.
pub fn load_table(config: &AppConfig) -> Result<Cow<'static, DefinitionTable>> {
    match &config.database {
        Some(dir) => {
            info!("Loading group declarations from {:?}", dir);
            Ok(Cow::Owned(DefinitionTable::load_dir(dir)?))
        }
        None => {
            info!("Using the built-in definition table.");
            DefinitionTable::builtin()
                .map(Cow::Borrowed)
                .map_err(CliError::BuiltinTable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn config(database: Option<PathBuf>) -> AppConfig {
        AppConfig {
            database,
            charge_set: "amber_charge".to_string(),
            atom_type_set: "amber91_atom_type".to_string(),
            strict: false,
        }
    }

    #[test]
    fn no_database_selects_the_builtin_table() {
        let table = load_table(&config(None)).unwrap();
        assert!(matches!(table, Cow::Borrowed(_)));
        assert!(table.contains("d-thymine"));
    }

    #[test]
    fn database_directory_is_loaded() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("water.toml"),
            "name = \"water\"\nsymbol = \"HOH\"\n\n[atoms]\nO = \"O\"\n",
        )
        .unwrap();

        let table = load_table(&config(Some(dir.path().to_path_buf()))).unwrap();
        assert_eq!(table.names(), vec!["water"]);
    }

    #[test]
    fn missing_database_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let result = load_table(&config(Some(dir.path().join("absent"))));
        assert!(matches!(result, Err(CliError::TableLoad(_))));
    }
}
