use residb::core::io::atom_table::AtomTableError;
use residb::core::io::declaration::DeclarationError;
use residb::core::table::error::{ResolveError, TableLoadError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    TableLoad(#[from] TableLoadError),

    #[error("The built-in database failed to load: {0}")]
    BuiltinTable(&'static TableLoadError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    #[error(transparent)]
    AtomTable(#[from] AtomTableError),

    #[error("Validation failed with {errors} error(s) and {warnings} warning(s)")]
    ValidationFailed { errors: usize, warnings: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
