use super::atom::AtomPath;
use super::group::{AtomTypeSet, ChargeSet, GroupDefinition, PdbMapEntry};
use super::topology::{Bond, ChainLinks};
use std::collections::{BTreeMap, BTreeSet};

/// The flattened view of a group definition.
///
/// Components are gone: every atom, bond, chain link, parameter and PDB mapping of the group
/// and of its (transitive) components is expressed with a fully-qualified [`AtomPath`]
/// relative to this group. This is the record handed to structure builders and force-field
/// tooling.
///
/// Resolved groups are produced by
/// [`DefinitionTable::resolve`](crate::core::table::registry::DefinitionTable::resolve)
/// and are plain values: they do not borrow from the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedGroup {
    /// Name of the group that was resolved.
    pub name: String,
    /// Symbol of the group that was resolved.
    pub symbol: Option<String>,
    /// Every atom of the group, keyed by qualified path, with its element symbol.
    pub atoms: BTreeMap<AtomPath, String>,
    /// Every bond of the group, including the bonds internal to its components.
    pub bonds: BTreeSet<Bond>,
    /// The group's own chain link atoms.
    pub chain_links: ChainLinks,
    /// Charge parameter sets by name.
    pub charges: BTreeMap<String, ChargeSet>,
    /// Atom type parameter sets by name.
    pub atom_types: BTreeMap<String, AtomTypeSet>,
    /// PDB naming maps, one entry per residue name.
    pub pdbmap: Vec<PdbMapEntry>,
    /// Alternative PDB atom name to canonical PDB atom name.
    pub pdb_alternative: BTreeMap<String, String>,
    /// Charges declared at more than one composition level, as `(set, atom)`.
    /// `charges` keeps the outermost declaration.
    pub charge_overrides: BTreeSet<(String, AtomPath)>,
    /// Atom types declared at more than one composition level, as `(set, atom)`.
    pub atom_type_overrides: BTreeSet<(String, AtomPath)>,
}

impl ResolvedGroup {
    /// Returns the element symbol of the atom at `path`.
    pub fn atom(&self, path: &AtomPath) -> Option<&str> {
        self.atoms.get(path).map(String::as_str)
    }

    pub fn contains_atom(&self, path: &AtomPath) -> bool {
        self.atoms.contains_key(path)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Returns the charge of `path` in the parameter set `set`.
    pub fn charge(&self, set: &str, path: &AtomPath) -> Option<f64> {
        self.charges.get(set)?.get(path).copied()
    }

    /// Sums the charges of the parameter set `set`.
    ///
    /// Returns `None` if the set does not exist. A set that does not cover every atom
    /// still sums the charges it has; use validation to detect the gap.
    pub fn total_charge(&self, set: &str) -> Option<f64> {
        self.charges.get(set).map(|charges| charges.values().sum())
    }

    pub fn atom_type(&self, set: &str, path: &AtomPath) -> Option<&str> {
        self.atom_types.get(set)?.get(path).map(String::as_str)
    }

    /// Returns the atoms bonded to `path`, in path order.
    pub fn neighbors(&self, path: &AtomPath) -> Vec<&AtomPath> {
        self.bonds
            .iter()
            .filter_map(|bond| bond.partner(path))
            .collect()
    }

    /// Finds the atom that a PDB residue calls `pdb_name`.
    ///
    /// Alternative (legacy) names are translated to their canonical name first.
    pub fn atom_for_pdb_name(&self, residue: &str, pdb_name: &str) -> Option<&AtomPath> {
        let canonical = self
            .pdb_alternative
            .get(pdb_name)
            .map(String::as_str)
            .unwrap_or(pdb_name);
        self.pdbmap
            .iter()
            .find(|entry| entry.residue == residue)?
            .atoms
            .get(canonical)
    }

    /// Returns every PDB name the atom at `path` is known by, as `(residue, pdb_name)`.
    pub fn pdb_names(&self, path: &AtomPath) -> Vec<(&str, &str)> {
        self.pdbmap
            .iter()
            .flat_map(|entry| {
                entry
                    .atoms
                    .iter()
                    .filter(move |(_, atom)| *atom == path)
                    .map(move |(pdb_name, _)| (entry.residue.as_str(), pdb_name.as_str()))
            })
            .collect()
    }

    /// Converts the flattened record back into a component-free declaration.
    ///
    /// Atoms are declared under their full paths, so resolving the returned definition
    /// yields a record equal to `self`, except that override records are gone: the
    /// returned declaration holds a single value per atom and set.
    pub fn to_definition(&self) -> GroupDefinition {
        GroupDefinition {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            bonds: self
                .bonds
                .iter()
                .map(|bond| {
                    let (a, b) = bond.atoms();
                    (a.clone(), b.clone())
                })
                .collect(),
            components: BTreeMap::new(),
            atoms: self.atoms.clone(),
            chain_links: self.chain_links.clone(),
            charges: self.charges.clone(),
            atom_types: self.atom_types.clone(),
            pdb_alternative: self.pdb_alternative.clone(),
            pdbmap: self.pdbmap.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> AtomPath {
        s.parse().unwrap()
    }

    fn hydroxyl() -> ResolvedGroup {
        let mut group = ResolvedGroup {
            name: "hydroxyl".to_string(),
            ..Default::default()
        };
        group.atoms.insert(path("O"), "O".to_string());
        group.atoms.insert(path("H"), "H".to_string());
        group.bonds.insert(Bond::new(path("O"), path("H")));
        let charges = group.charges.entry("amber_charge".to_string()).or_default();
        charges.insert(path("O"), -0.6);
        charges.insert(path("H"), 0.4);
        let mut entry = PdbMapEntry::new("HOH");
        entry.atoms.insert("O".to_string(), path("O"));
        entry.atoms.insert("H1".to_string(), path("H"));
        group.pdbmap.push(entry);
        group
            .pdb_alternative
            .insert("HW1".to_string(), "H1".to_string());
        group
    }

    #[test]
    fn atom_queries_return_declared_atoms() {
        let group = hydroxyl();
        assert_eq!(group.atom(&path("O")), Some("O"));
        assert!(group.contains_atom(&path("H")));
        assert!(!group.contains_atom(&path("C")));
        assert_eq!(group.atom_count(), 2);
        assert_eq!(group.bond_count(), 1);
    }

    #[test]
    fn total_charge_sums_the_named_set() {
        let group = hydroxyl();
        let total = group.total_charge("amber_charge").unwrap();
        assert!((total - (-0.2)).abs() < 1e-12);
        assert_eq!(group.total_charge("opls_charge"), None);
        assert_eq!(group.charge("amber_charge", &path("H")), Some(0.4));
    }

    #[test]
    fn neighbors_follow_bonds_in_both_directions() {
        let group = hydroxyl();
        assert_eq!(group.neighbors(&path("O")), vec![&path("H")]);
        assert_eq!(group.neighbors(&path("H")), vec![&path("O")]);
        assert!(group.neighbors(&path("C")).is_empty());
    }

    #[test]
    fn atom_for_pdb_name_honours_alternative_names() {
        let group = hydroxyl();
        assert_eq!(group.atom_for_pdb_name("HOH", "H1"), Some(&path("H")));
        assert_eq!(group.atom_for_pdb_name("HOH", "HW1"), Some(&path("H")));
        assert_eq!(group.atom_for_pdb_name("WAT", "H1"), None);
        assert_eq!(group.atom_for_pdb_name("HOH", "H2"), None);
    }

    #[test]
    fn pdb_names_lists_all_aliases_of_an_atom() {
        let group = hydroxyl();
        assert_eq!(group.pdb_names(&path("H")), vec![("HOH", "H1")]);
        assert!(group.pdb_names(&path("C")).is_empty());
    }

    #[test]
    fn to_definition_has_no_components_and_keeps_content() {
        let group = hydroxyl();
        let definition = group.to_definition();
        assert!(definition.components.is_empty());
        assert_eq!(definition.atoms, group.atoms);
        assert_eq!(definition.bonds, vec![(path("H"), path("O"))]);
        assert_eq!(definition.charges, group.charges);
        assert_eq!(definition.pdbmap, group.pdbmap);
    }
}
