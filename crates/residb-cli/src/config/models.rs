use std::path::PathBuf;

/// Effective settings after layering defaults, the config file and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory of declaration files; `None` selects the built-in database.
    pub database: Option<PathBuf>,
    pub charge_set: String,
    pub atom_type_set: String,
    pub strict: bool,
}
