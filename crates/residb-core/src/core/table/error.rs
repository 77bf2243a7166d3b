use crate::core::io::declaration::DeclarationError;
use crate::core::models::atom::AtomPath;
use std::fmt;
use thiserror::Error;

/// Why a component reference could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentFailure {
    /// No group with the referenced name is registered.
    Missing,
    /// The reference closes a composition cycle. The chain starts and ends with the same name.
    Cycle { chain: Vec<String> },
}

impl fmt::Display for ComponentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "no such group is registered"),
            Self::Cycle { chain } => write!(f, "composition cycle {}", chain.join(" -> ")),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Unknown group '{name}'")]
    UnknownGroup { name: String },

    #[error("Component '{role}' of group '{group}' refers to '{target}', which cannot be resolved: {reason}")]
    UnresolvedComponent {
        group: String,
        role: String,
        target: String,
        reason: ComponentFailure,
    },

    #[error("Atom '{path}' is declared more than once while resolving group '{group}'")]
    DuplicateAtom { group: String, path: AtomPath },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Group name cannot be empty or padded with whitespace: '{0}'")]
    InvalidName(String),

    #[error("Group '{0}' is already registered")]
    DuplicateName(String),

    #[error("Symbol '{symbol}' of group '{name}' is already used by group '{existing}'")]
    DuplicateSymbol {
        name: String,
        symbol: String,
        existing: String,
    },

    #[error("Symbol of group '{name}' cannot be empty or padded with whitespace: '{symbol}'")]
    InvalidSymbol { name: String, symbol: String },

    #[error("Group name '{name}' is already used as the symbol of group '{existing}'")]
    NameUsedAsSymbol { name: String, existing: String },

    #[error("Symbol '{symbol}' of group '{name}' is already the name of another group")]
    SymbolUsedAsName { name: String, symbol: String },

    #[error("Group '{group}' binds a component to the invalid role '{role}'")]
    InvalidRole { group: String, role: String },
}

#[derive(Debug, Error)]
pub enum TableLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Declaration(#[from] DeclarationError),

    #[error("Cannot register the group declared in '{path}': {source}")]
    Table { path: String, source: TableError },
}
