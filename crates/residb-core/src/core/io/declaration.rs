use crate::core::models::group::GroupDefinition;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DeclarationError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("TOML serialization error for group '{name}': {source}")]
    Serialize {
        name: String,
        source: toml::ser::Error,
    },
}

/// Parses one group declaration. `origin` names the source in error messages.
pub fn parse_definition(content: &str, origin: &str) -> Result<GroupDefinition, DeclarationError> {
    toml::from_str(content).map_err(|e| DeclarationError::Toml {
        path: origin.to_string(),
        source: e,
    })
}

pub fn read_definition(path: &Path) -> Result<GroupDefinition, DeclarationError> {
    debug!("Reading group declaration from {:?}", path);
    let content = std::fs::read_to_string(path).map_err(|e| DeclarationError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    parse_definition(&content, &path.to_string_lossy())
}

pub fn write_definition(definition: &GroupDefinition) -> Result<String, DeclarationError> {
    toml::to_string(definition).map_err(|e| DeclarationError::Serialize {
        name: definition.name.clone(),
        source: e,
    })
}

pub fn save_definition(definition: &GroupDefinition, path: &Path) -> Result<(), DeclarationError> {
    let content = write_definition(definition)?;
    std::fs::write(path, content).map_err(|e| DeclarationError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
