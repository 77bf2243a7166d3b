use super::issue::ValidationIssue;
use crate::core::models::resolved::ResolvedGroup;
use crate::core::utils::elements::is_known_element;
use std::collections::HashSet;

/// Checks `group` against every invariant and returns the issues found.
///
/// Issues are reported in a stable order: charges, bonds, chain links, atom types, PDB
/// maps, elements. An empty result means the group is ready for use.
pub fn validate(group: &ResolvedGroup) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    check_charges(group, &mut issues);
    check_bonds(group, &mut issues);
    check_chain_links(group, &mut issues);
    check_atom_types(group, &mut issues);
    check_pdbmap(group, &mut issues);
    check_elements(group, &mut issues);
    issues
}

fn check_charges(group: &ResolvedGroup, issues: &mut Vec<ValidationIssue>) {
    if group.charges.is_empty() {
        issues.push(ValidationIssue::NoChargeSet);
        return;
    }
    for (set, charges) in &group.charges {
        for atom in group.atoms.keys().filter(|a| !charges.contains_key(*a)) {
            issues.push(ValidationIssue::MissingCharge {
                set: set.clone(),
                atom: atom.clone(),
            });
        }
        for atom in charges.keys().filter(|a| !group.contains_atom(a)) {
            issues.push(ValidationIssue::DanglingCharge {
                set: set.clone(),
                atom: atom.clone(),
            });
        }
    }
    for (set, atom) in &group.charge_overrides {
        issues.push(ValidationIssue::DuplicateCharge {
            set: set.clone(),
            atom: atom.clone(),
        });
    }
}

fn check_bonds(group: &ResolvedGroup, issues: &mut Vec<ValidationIssue>) {
    for bond in &group.bonds {
        if bond.is_self_bond() {
            issues.push(ValidationIssue::SelfBond {
                atom: bond.atoms().0.clone(),
            });
        }
        let (a, b) = bond.atoms();
        let mut seen = HashSet::new();
        for atom in [a, b] {
            if !group.contains_atom(atom) && seen.insert(atom) {
                issues.push(ValidationIssue::DanglingBond {
                    bond: bond.clone(),
                    atom: atom.clone(),
                });
            }
        }
    }
}

fn check_chain_links(group: &ResolvedGroup, issues: &mut Vec<ValidationIssue>) {
    for (end, atom) in group.chain_links.iter() {
        if !group.contains_atom(atom) {
            issues.push(ValidationIssue::DanglingChainLink {
                end,
                atom: atom.clone(),
            });
        }
    }
}

fn check_atom_types(group: &ResolvedGroup, issues: &mut Vec<ValidationIssue>) {
    for (set, types) in &group.atom_types {
        for atom in group.atoms.keys().filter(|a| !types.contains_key(*a)) {
            issues.push(ValidationIssue::MissingAtomType {
                set: set.clone(),
                atom: atom.clone(),
            });
        }
        for atom in types.keys().filter(|a| !group.contains_atom(a)) {
            issues.push(ValidationIssue::DanglingAtomType {
                set: set.clone(),
                atom: atom.clone(),
            });
        }
    }
    for (set, atom) in &group.atom_type_overrides {
        issues.push(ValidationIssue::DuplicateAtomType {
            set: set.clone(),
            atom: atom.clone(),
        });
    }
}

fn check_pdbmap(group: &ResolvedGroup, issues: &mut Vec<ValidationIssue>) {
    for entry in &group.pdbmap {
        for (pdb_name, atom) in &entry.atoms {
            if !group.contains_atom(atom) {
                issues.push(ValidationIssue::DanglingPdbMapping {
                    residue: entry.residue.clone(),
                    pdb_name: pdb_name.clone(),
                    atom: atom.clone(),
                });
            }
        }
    }

    let canonical_names: HashSet<&str> = group
        .pdbmap
        .iter()
        .flat_map(|entry| entry.atoms.keys().map(String::as_str))
        .collect();
    for (alias, canonical) in &group.pdb_alternative {
        if !canonical_names.contains(canonical.as_str()) {
            issues.push(ValidationIssue::UnknownPdbAlternative {
                alias: alias.clone(),
                canonical: canonical.clone(),
            });
        }
    }
}

fn check_elements(group: &ResolvedGroup, issues: &mut Vec<ValidationIssue>) {
    for (atom, element) in &group.atoms {
        if !is_known_element(element) {
            issues.push(ValidationIssue::UnknownElement {
                atom: atom.clone(),
                element: element.clone(),
            });
        }
    }
}
