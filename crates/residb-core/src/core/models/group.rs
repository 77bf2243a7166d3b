use super::atom::AtomPath;
use super::topology::ChainLinks;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named set of per-atom charges (e.g., `amber_charge`), keyed by atom reference.
pub type ChargeSet = BTreeMap<AtomPath, f64>;

/// A named set of per-atom force-field type codes (e.g., `amber91_atom_type`).
pub type AtomTypeSet = BTreeMap<AtomPath, String>;

/// Maps the atoms of a group to the atom names used by one PDB residue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PdbMapEntry {
    /// PDB residue name (e.g., "DT", "SER").
    pub residue: String,
    /// PDB atom name to atom reference.
    #[serde(default)]
    pub atoms: BTreeMap<String, AtomPath>,
}

impl PdbMapEntry {
    pub fn new(residue: &str) -> Self {
        Self {
            residue: residue.to_string(),
            atoms: BTreeMap::new(),
        }
    }

    pub(crate) fn prefixed(&self, role: &str) -> Self {
        Self {
            residue: self.residue.clone(),
            atoms: self
                .atoms
                .iter()
                .map(|(pdb_name, atom)| (pdb_name.clone(), atom.prefixed(role)))
                .collect(),
        }
    }
}

/// The declarative definition of one chemical building block.
///
/// This is the record a declaration file describes: atoms declared directly, other groups
/// composed by name under a local role, the bonds among all of them, the chain link atoms,
/// force-field parameter sets and PDB naming maps. Every atom reference is relative to
/// this group, so a component atom is written `role.atom`.
///
/// Field order matters for serialization: plain values come before tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupDefinition {
    /// Unique identifier of the group (e.g., "d-thymine").
    pub name: String,
    /// Short cross-reference code (e.g., "DT").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Bonded atom pairs. Order within a pair is irrelevant.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bonds: Vec<(AtomPath, AtomPath)>,
    /// Local role name to the name of the composed group.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, String>,
    /// Locally declared atoms and their element (or type) symbol.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub atoms: BTreeMap<AtomPath, String>,
    #[serde(default, skip_serializing_if = "ChainLinks::is_open")]
    pub chain_links: ChainLinks,
    /// Charge parameter sets by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub charges: BTreeMap<String, ChargeSet>,
    /// Atom type parameter sets by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub atom_types: BTreeMap<String, AtomTypeSet>,
    /// Alternative (legacy) PDB atom name to canonical PDB atom name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pdb_alternative: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pdbmap: Vec<PdbMapEntry>,
}

impl GroupDefinition {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    pub fn with_component(mut self, role: &str, group: &str) -> Self {
        self.components.insert(role.to_string(), group.to_string());
        self
    }

    pub fn with_atom(mut self, atom: AtomPath, element: &str) -> Self {
        self.atoms.insert(atom, element.to_string());
        self
    }

    pub fn with_bond(mut self, a: AtomPath, b: AtomPath) -> Self {
        self.bonds.push((a, b));
        self
    }

    pub fn with_chain_links(mut self, chain_links: ChainLinks) -> Self {
        self.chain_links = chain_links;
        self
    }

    pub fn with_charge(mut self, set: &str, atom: AtomPath, charge: f64) -> Self {
        self.charges
            .entry(set.to_string())
            .or_default()
            .insert(atom, charge);
        self
    }

    pub fn with_atom_type(mut self, set: &str, atom: AtomPath, atom_type: &str) -> Self {
        self.atom_types
            .entry(set.to_string())
            .or_default()
            .insert(atom, atom_type.to_string());
        self
    }

    pub fn with_pdb_entry(mut self, entry: PdbMapEntry) -> Self {
        self.pdbmap.push(entry);
        self
    }

    pub fn with_pdb_alternative(mut self, alias: &str, canonical: &str) -> Self {
        self.pdb_alternative
            .insert(alias.to_string(), canonical.to_string());
        self
    }

    pub fn is_composite(&self) -> bool {
        !self.components.is_empty()
    }
}
