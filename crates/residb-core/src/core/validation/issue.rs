use crate::core::models::atom::AtomPath;
use crate::core::models::topology::{Bond, ChainEnd};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Warning => "warning",
                Self::Error => "error",
            }
        )
    }
}

/// A violated invariant found in a resolved group.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationIssue {
    /// An atom has no entry in a charge set.
    MissingCharge { set: String, atom: AtomPath },
    /// A charge set assigns a charge to an atom the group does not have.
    DanglingCharge { set: String, atom: AtomPath },
    /// A charge for the atom is declared by a component and again by an enclosing group.
    DuplicateCharge { set: String, atom: AtomPath },
    /// The group declares no charge set at all.
    NoChargeSet,
    /// A bond refers to an atom the group does not have.
    DanglingBond { bond: Bond, atom: AtomPath },
    /// A bond connects an atom to itself.
    SelfBond { atom: AtomPath },
    /// A chain link refers to an atom the group does not have.
    DanglingChainLink { end: ChainEnd, atom: AtomPath },
    /// An atom type set types an atom the group does not have.
    DanglingAtomType { set: String, atom: AtomPath },
    /// An atom has no entry in an atom type set.
    MissingAtomType { set: String, atom: AtomPath },
    /// An atom type is declared by a component and again by an enclosing group.
    DuplicateAtomType { set: String, atom: AtomPath },
    /// A PDB map entry refers to an atom the group does not have.
    DanglingPdbMapping {
        residue: String,
        pdb_name: String,
        atom: AtomPath,
    },
    /// An alternative PDB name maps to a canonical name no PDB map entry uses.
    UnknownPdbAlternative { alias: String, canonical: String },
    /// An atom's element symbol is not a known chemical element.
    UnknownElement { atom: AtomPath, element: String },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoChargeSet
            | Self::MissingAtomType { .. }
            | Self::UnknownPdbAlternative { .. }
            | Self::UnknownElement { .. } => Severity::Warning,
            Self::MissingCharge { .. }
            | Self::DanglingCharge { .. }
            | Self::DuplicateCharge { .. }
            | Self::DanglingBond { .. }
            | Self::SelfBond { .. }
            | Self::DanglingChainLink { .. }
            | Self::DanglingAtomType { .. }
            | Self::DuplicateAtomType { .. }
            | Self::DanglingPdbMapping { .. } => Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCharge { set, atom } => {
                write!(f, "atom '{}' has no charge in set '{}'", atom, set)
            }
            Self::DanglingCharge { set, atom } => {
                write!(f, "charge set '{}' refers to unknown atom '{}'", set, atom)
            }
            Self::DuplicateCharge { set, atom } => write!(
                f,
                "atom '{}' has a charge in set '{}' declared more than once",
                atom, set
            ),
            Self::NoChargeSet => write!(f, "no charge set is declared"),
            Self::DanglingBond { bond, atom } => {
                write!(f, "bond {} refers to unknown atom '{}'", bond, atom)
            }
            Self::SelfBond { atom } => write!(f, "atom '{}' is bonded to itself", atom),
            Self::DanglingChainLink { end, atom } => {
                write!(f, "{} chain link refers to unknown atom '{}'", end, atom)
            }
            Self::DanglingAtomType { set, atom } => {
                write!(f, "atom type set '{}' refers to unknown atom '{}'", set, atom)
            }
            Self::MissingAtomType { set, atom } => {
                write!(f, "atom '{}' has no type in set '{}'", atom, set)
            }
            Self::DuplicateAtomType { set, atom } => write!(
                f,
                "atom '{}' has a type in set '{}' declared more than once",
                atom, set
            ),
            Self::DanglingPdbMapping {
                residue,
                pdb_name,
                atom,
            } => write!(
                f,
                "PDB name '{}' of residue '{}' refers to unknown atom '{}'",
                pdb_name, residue, atom
            ),
            Self::UnknownPdbAlternative { alias, canonical } => write!(
                f,
                "alternative PDB name '{}' maps to '{}', which no PDB map entry uses",
                alias, canonical
            ),
            Self::UnknownElement { atom, element } => {
                write!(f, "atom '{}' has unknown element '{}'", atom, element)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> AtomPath {
        s.parse().unwrap()
    }

    #[test]
    fn severities_split_errors_from_findings() {
        let missing = ValidationIssue::MissingCharge {
            set: "amber_charge".to_string(),
            atom: path("sugar.O_3"),
        };
        assert_eq!(missing.severity(), Severity::Error);
        assert!(missing.is_error());
        assert_eq!(ValidationIssue::NoChargeSet.severity(), Severity::Warning);
        assert!(!ValidationIssue::NoChargeSet.is_error());
        assert!(Severity::Error > Severity::Warning);
    }

    #[test]
    fn display_names_the_offending_atom() {
        let issue = ValidationIssue::DanglingChainLink {
            end: ChainEnd::Tail,
            atom: path("sugar.O_3"),
        };
        assert_eq!(
            issue.to_string(),
            "tail chain link refers to unknown atom 'sugar.O_3'"
        );
        let issue = ValidationIssue::DanglingBond {
            bond: Bond::new(path("P"), path("sugar.O_5")),
            atom: path("sugar.O_5"),
        };
        assert_eq!(
            issue.to_string(),
            "bond P-sugar.O_5 refers to unknown atom 'sugar.O_5'"
        );
    }

    #[test]
    fn redeclared_parameters_are_errors() {
        let charge = ValidationIssue::DuplicateCharge {
            set: "amber_charge".to_string(),
            atom: path("oh.O"),
        };
        let atom_type = ValidationIssue::DuplicateAtomType {
            set: "amber91_atom_type".to_string(),
            atom: path("oh.O"),
        };
        assert!(charge.is_error());
        assert!(atom_type.is_error());
        assert_eq!(
            charge.to_string(),
            "atom 'oh.O' has a charge in set 'amber_charge' declared more than once"
        );
        assert_eq!(
            atom_type.to_string(),
            "atom 'oh.O' has a type in set 'amber91_atom_type' declared more than once"
        );
    }
}
