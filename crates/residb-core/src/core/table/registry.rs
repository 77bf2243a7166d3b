use super::error::{ResolveError, TableError, TableLoadError};
use super::resolver::Resolver;
use crate::core::io::declaration::{parse_definition, read_definition};
use crate::core::models::atom::is_valid_role;
use crate::core::models::group::GroupDefinition;
use crate::core::models::ids::GroupId;
use crate::core::models::resolved::ResolvedGroup;
use crate::core::validation::{ValidationIssue, validate};
use slotmap::SlotMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DECLARATION_EXTENSION: &str = "toml";

/// The table of residue and fragment definitions.
///
/// Groups are registered once under a unique name and, optionally, a unique symbol. After
/// loading, the table is read-only reference data: any number of readers may look up or
/// resolve groups concurrently without coordination.
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    /// Primary storage for definitions using a slot map for stable IDs.
    groups: SlotMap<GroupId, GroupDefinition>,
    /// Lookup map from group name to its ID.
    name_index: HashMap<String, GroupId>,
    /// Lookup map from group symbol to its ID.
    symbol_index: HashMap<String, GroupId>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition.
    ///
    /// # Errors
    ///
    /// Returns `TableError::InvalidName` / `TableError::InvalidSymbol` for an empty or
    /// whitespace-padded name or symbol, `TableError::InvalidRole` if a component role cannot
    /// be used as a path segment, `TableError::DuplicateName` / `TableError::DuplicateSymbol`
    /// if the name or symbol is already taken. Names and symbols share one lookup space, so
    /// `TableError::NameUsedAsSymbol` / `TableError::SymbolUsedAsName` reject a name equal to
    /// another group's symbol and the reverse. The table is unchanged on error.
    pub fn insert(&mut self, definition: GroupDefinition) -> Result<GroupId, TableError> {
        if definition.name.is_empty() || definition.name.trim() != definition.name {
            return Err(TableError::InvalidName(definition.name));
        }
        if let Some(symbol) = &definition.symbol {
            if symbol.is_empty() || symbol.trim() != symbol {
                return Err(TableError::InvalidSymbol {
                    name: definition.name.clone(),
                    symbol: symbol.clone(),
                });
            }
        }
        if let Some(role) = definition.components.keys().find(|r| !is_valid_role(r)) {
            return Err(TableError::InvalidRole {
                group: definition.name.clone(),
                role: role.clone(),
            });
        }
        if self.name_index.contains_key(&definition.name) {
            return Err(TableError::DuplicateName(definition.name));
        }
        if let Some(&existing_id) = self.symbol_index.get(&definition.name) {
            return Err(TableError::NameUsedAsSymbol {
                existing: self.groups[existing_id].name.clone(),
                name: definition.name,
            });
        }
        if let Some(symbol) = &definition.symbol {
            if let Some(&existing_id) = self.symbol_index.get(symbol) {
                return Err(TableError::DuplicateSymbol {
                    name: definition.name.clone(),
                    symbol: symbol.clone(),
                    existing: self.groups[existing_id].name.clone(),
                });
            }
            if self.name_index.contains_key(symbol) {
                return Err(TableError::SymbolUsedAsName {
                    name: definition.name.clone(),
                    symbol: symbol.clone(),
                });
            }
        }

        let name = definition.name.clone();
        let symbol = definition.symbol.clone();
        let id = self.groups.insert(definition);
        self.name_index.insert(name, id);
        if let Some(symbol) = symbol {
            self.symbol_index.insert(symbol, id);
        }
        Ok(id)
    }

    pub fn from_definitions<I>(definitions: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = GroupDefinition>,
    {
        let mut table = Self::new();
        for definition in definitions {
            table.insert(definition)?;
        }
        Ok(table)
    }

    /// Builds a table from in-memory declaration texts, given as `(origin, content)` pairs.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, TableLoadError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        for (origin, content) in sources {
            let definition = parse_definition(content, origin)?;
            table
                .insert(definition)
                .map_err(|e| TableLoadError::Table {
                    path: origin.to_string(),
                    source: e,
                })?;
        }
        Ok(table)
    }

    /// Loads every `*.toml` declaration file of `dir`, one group per file.
    ///
    /// Files are processed in file-name order, so duplicate-name errors are reproducible.
    /// Subdirectories and files with other extensions are ignored.
    pub fn load_dir(dir: &Path) -> Result<Self, TableLoadError> {
        let io_error = |e: std::io::Error| TableLoadError::Io {
            path: dir.to_string_lossy().to_string(),
            source: e,
        };
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(io_error)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()
            .map_err(io_error)?;
        paths.retain(|p| {
            p.is_file() && p.extension().is_some_and(|ext| ext == DECLARATION_EXTENSION)
        });
        paths.sort();

        let mut table = Self::new();
        for path in &paths {
            let definition = read_definition(path)?;
            debug!("Registering group '{}' from {:?}", definition.name, path);
            table
                .insert(definition)
                .map_err(|e| TableLoadError::Table {
                    path: path.to_string_lossy().to_string(),
                    source: e,
                })?;
        }
        info!("Loaded {} group definitions from {:?}", table.len(), dir);
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Option<&GroupDefinition> {
        self.name_index.get(name).map(|&id| &self.groups[id])
    }

    pub fn get_by_id(&self, id: GroupId) -> Option<&GroupDefinition> {
        self.groups.get(id)
    }

    pub fn get_by_symbol(&self, symbol: &str) -> Option<&GroupDefinition> {
        self.symbol_index.get(symbol).map(|&id| &self.groups[id])
    }

    /// Looks `key` up as a name first, then as a symbol.
    pub fn lookup(&self, key: &str) -> Option<&GroupDefinition> {
        self.get(key).or_else(|| self.get_by_symbol(key))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.name_index.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GroupId, &GroupDefinition)> {
        self.groups.iter()
    }

    /// Resolves the group registered as `name` into its flattened form.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UnknownGroup` if `name` is not registered,
    /// `ResolveError::UnresolvedComponent` if a (transitive) component is missing or the
    /// components form a cycle, and `ResolveError::DuplicateAtom` if two atoms flatten to
    /// the same path.
    pub fn resolve(&self, name: &str) -> Result<ResolvedGroup, ResolveError> {
        let definition = self.get(name).ok_or_else(|| ResolveError::UnknownGroup {
            name: name.to_string(),
        })?;
        Resolver::new(self).resolve(definition)
    }

    /// Resolves the group registered under `symbol`.
    pub fn resolve_symbol(&self, symbol: &str) -> Result<ResolvedGroup, ResolveError> {
        let definition = self
            .get_by_symbol(symbol)
            .ok_or_else(|| ResolveError::UnknownGroup {
                name: symbol.to_string(),
            })?;
        Resolver::new(self).resolve(definition)
    }

    /// Resolves `key` as a name or, failing that, as a symbol.
    pub fn resolve_lookup(&self, key: &str) -> Result<ResolvedGroup, ResolveError> {
        let definition = self.lookup(key).ok_or_else(|| ResolveError::UnknownGroup {
            name: key.to_string(),
        })?;
        Resolver::new(self).resolve(definition)
    }

    /// Resolves `name` and checks the result against the data invariants.
    pub fn validate(&self, name: &str) -> Result<Vec<ValidationIssue>, ResolveError> {
        let resolved = self.resolve(name)?;
        Ok(validate(&resolved))
    }
}
