use super::error::{ComponentFailure, ResolveError};
use super::registry::DefinitionTable;
use crate::core::models::atom::AtomPath;
use crate::core::models::group::{GroupDefinition, PdbMapEntry};
use crate::core::models::resolved::ResolvedGroup;
use crate::core::models::topology::Bond;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::trace;

/// Flattens group definitions by expanding their components.
///
/// The resolver keeps an explicit stack of the groups currently being expanded. A component
/// whose target is already on the stack closes a cycle and is reported instead of being
/// recursed into, so resolution depth is bounded by the number of distinct groups. Groups
/// that finished resolving are cached for the lifetime of the resolver, so a group shared by
/// several components is flattened once.
pub struct Resolver<'a> {
    table: &'a DefinitionTable,
    stack: Vec<String>,
    cache: HashMap<String, ResolvedGroup>,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a DefinitionTable) -> Self {
        Self {
            table,
            stack: Vec::new(),
            cache: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, definition: &GroupDefinition) -> Result<ResolvedGroup, ResolveError> {
        if let Some(cached) = self.cache.get(&definition.name) {
            return Ok(cached.clone());
        }

        self.stack.push(definition.name.clone());
        let result = self.flatten(definition);
        self.stack.pop();

        let resolved = result?;
        self.cache.insert(definition.name.clone(), resolved.clone());
        Ok(resolved)
    }

    fn flatten(&mut self, definition: &GroupDefinition) -> Result<ResolvedGroup, ResolveError> {
        trace!("Flattening group '{}'", definition.name);
        let mut resolved = ResolvedGroup {
            name: definition.name.clone(),
            symbol: definition.symbol.clone(),
            chain_links: definition.chain_links.clone(),
            ..Default::default()
        };
        let mut inherited_pdbmap = Vec::new();

        for (role, target) in &definition.components {
            let component = self.component(definition, role, target)?;
            let sub = self.resolve(component)?;

            for (path, element) in sub.atoms {
                insert_atom(&mut resolved, path.prefixed(role), element)?;
            }
            resolved
                .bonds
                .extend(sub.bonds.iter().map(|bond| bond.prefixed(role)));
            merge_sets(&mut resolved.charges, sub.charges, role);
            merge_sets(&mut resolved.atom_types, sub.atom_types, role);
            resolved
                .charge_overrides
                .extend(prefixed_overrides(sub.charge_overrides, role));
            resolved
                .atom_type_overrides
                .extend(prefixed_overrides(sub.atom_type_overrides, role));
            inherited_pdbmap.extend(sub.pdbmap.iter().map(|entry| entry.prefixed(role)));
            resolved.pdb_alternative.extend(sub.pdb_alternative);
        }

        for (path, element) in &definition.atoms {
            insert_atom(&mut resolved, path.clone(), element.clone())?;
        }
        resolved.bonds.extend(
            definition
                .bonds
                .iter()
                .map(|(a, b)| Bond::new(a.clone(), b.clone())),
        );
        apply_own_sets(
            &mut resolved.charges,
            &definition.charges,
            &mut resolved.charge_overrides,
        );
        apply_own_sets(
            &mut resolved.atom_types,
            &definition.atom_types,
            &mut resolved.atom_type_overrides,
        );
        resolved.pdbmap = merge_pdbmap(&definition.pdbmap, inherited_pdbmap);
        resolved.pdb_alternative.extend(
            definition
                .pdb_alternative
                .iter()
                .map(|(alias, canonical)| (alias.clone(), canonical.clone())),
        );

        Ok(resolved)
    }

    fn component(
        &self,
        definition: &GroupDefinition,
        role: &str,
        target: &str,
    ) -> Result<&'a GroupDefinition, ResolveError> {
        let failure = |reason| ResolveError::UnresolvedComponent {
            group: definition.name.clone(),
            role: role.to_string(),
            target: target.to_string(),
            reason,
        };

        if let Some(start) = self.stack.iter().position(|name| name == target) {
            let mut chain = self.stack[start..].to_vec();
            chain.push(target.to_string());
            return Err(failure(ComponentFailure::Cycle { chain }));
        }
        self.table
            .get(target)
            .ok_or_else(|| failure(ComponentFailure::Missing))
    }
}

fn insert_atom(
    resolved: &mut ResolvedGroup,
    path: AtomPath,
    element: String,
) -> Result<(), ResolveError> {
    if resolved.atoms.contains_key(&path) {
        return Err(ResolveError::DuplicateAtom {
            group: resolved.name.clone(),
            path,
        });
    }
    resolved.atoms.insert(path, element);
    Ok(())
}

/// Merges a component's parameter sets into `target`, prefixing every atom with `role`.
fn merge_sets<V>(
    target: &mut BTreeMap<String, BTreeMap<AtomPath, V>>,
    inherited: BTreeMap<String, BTreeMap<AtomPath, V>>,
    role: &str,
) {
    for (set, entries) in inherited {
        target.entry(set).or_default().extend(
            entries
                .into_iter()
                .map(|(path, value)| (path.prefixed(role), value)),
        );
    }
}

/// Applies the group's own parameter sets on top of the inherited ones. Every atom that
/// already had a value in the set is recorded in `overrides`; the own value is kept.
fn apply_own_sets<V: Clone>(
    target: &mut BTreeMap<String, BTreeMap<AtomPath, V>>,
    own: &BTreeMap<String, BTreeMap<AtomPath, V>>,
    overrides: &mut BTreeSet<(String, AtomPath)>,
) {
    for (set, entries) in own {
        let merged = target.entry(set.clone()).or_default();
        for (path, value) in entries {
            if merged.insert(path.clone(), value.clone()).is_some() {
                trace!("Parameter set '{}' redeclares atom '{}'", set, path);
                overrides.insert((set.clone(), path.clone()));
            }
        }
    }
}

fn prefixed_overrides(
    overrides: BTreeSet<(String, AtomPath)>,
    role: &str,
) -> impl Iterator<Item = (String, AtomPath)> + '_ {
    overrides
        .into_iter()
        .map(move |(set, path)| (set, path.prefixed(role)))
}

/// Own entries come first and win on conflicting PDB names; inherited entries for a residue
/// not yet present are appended in the order they were inherited.
fn merge_pdbmap(own: &[PdbMapEntry], inherited: Vec<PdbMapEntry>) -> Vec<PdbMapEntry> {
    let mut merged = own.to_vec();
    for entry in inherited {
        match merged.iter_mut().find(|e| e.residue == entry.residue) {
            Some(existing) => {
                for (pdb_name, atom) in entry.atoms {
                    existing.atoms.entry(pdb_name).or_insert(atom);
                }
            }
            None => merged.push(entry),
        }
    }
    merged
}
