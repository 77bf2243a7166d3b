//! The definition database shipped with the library.
//!
//! Declarations live in `data/groups/` and are embedded at compile time. They are parsed
//! on first use and shared, read-only, for the rest of the process.

use super::error::TableLoadError;
use super::registry::DefinitionTable;
use std::sync::OnceLock;

static BUILTIN_SOURCES: &[(&str, &str)] = &[
    ("phosphate.toml", include_str!("../../../data/groups/phosphate.toml")),
    ("d-sugar.toml", include_str!("../../../data/groups/d-sugar.toml")),
    ("d-sugar_3ter.toml", include_str!("../../../data/groups/d-sugar_3ter.toml")),
    ("thymine.toml", include_str!("../../../data/groups/thymine.toml")),
    ("cytosine.toml", include_str!("../../../data/groups/cytosine.toml")),
    ("d-thymine.toml", include_str!("../../../data/groups/d-thymine.toml")),
    ("d-cytosine.toml", include_str!("../../../data/groups/d-cytosine.toml")),
    ("d-cytosine_3ter.toml", include_str!("../../../data/groups/d-cytosine_3ter.toml")),
    ("ser_sidechain_uni2.toml", include_str!("../../../data/groups/ser_sidechain_uni2.toml")),
];

static BUILTIN_TABLE: OnceLock<Result<DefinitionTable, TableLoadError>> = OnceLock::new();

impl DefinitionTable {
    /// Returns the built-in definition table, parsing it on first use.
    ///
    /// Later calls return the same table (or the same error) without re-parsing.
    pub fn builtin() -> Result<&'static DefinitionTable, &'static TableLoadError> {
        BUILTIN_TABLE
            .get_or_init(|| DefinitionTable::from_sources(BUILTIN_SOURCES.iter().copied()))
            .as_ref()
    }
}
