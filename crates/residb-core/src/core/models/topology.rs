use super::atom::AtomPath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An unordered pair of bonded atoms.
///
/// The pair is stored normalized (smaller path first), so `Bond::new(a, b)` and
/// `Bond::new(b, a)` compare, hash and order identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bond {
    atom1: AtomPath, // The lesser of the two paths
    atom2: AtomPath, // The greater of the two paths
}

impl Bond {
    pub fn new(a: AtomPath, b: AtomPath) -> Self {
        if a <= b {
            Self { atom1: a, atom2: b }
        } else {
            Self { atom1: b, atom2: a }
        }
    }

    pub fn atoms(&self) -> (&AtomPath, &AtomPath) {
        (&self.atom1, &self.atom2)
    }

    pub fn contains(&self, atom: &AtomPath) -> bool {
        &self.atom1 == atom || &self.atom2 == atom
    }

    /// Returns the partner of `atom` in this bond, if `atom` takes part in it.
    pub fn partner(&self, atom: &AtomPath) -> Option<&AtomPath> {
        if &self.atom1 == atom {
            Some(&self.atom2)
        } else if &self.atom2 == atom {
            Some(&self.atom1)
        } else {
            None
        }
    }

    pub fn is_self_bond(&self) -> bool {
        self.atom1 == self.atom2
    }

    pub(crate) fn prefixed(&self, role: &str) -> Self {
        Self::new(self.atom1.prefixed(role), self.atom2.prefixed(role))
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.atom1, self.atom2)
    }
}

/// Identifies one end of a polymer chain link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainEnd {
    /// Connects to the preceding group (e.g., a nucleotide's 5' phosphorus).
    Head,
    /// Connects to the following group (e.g., a nucleotide's 3' oxygen).
    Tail,
}

impl fmt::Display for ChainEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Head => "head",
                Self::Tail => "tail",
            }
        )
    }
}

/// The two connection points of a group in a polymer chain.
///
/// Both slots always exist; an absent atom means the group does not link on that end,
/// as for a terminal residue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head: Option<AtomPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tail: Option<AtomPath>,
}

impl ChainLinks {
    pub fn new(head: Option<AtomPath>, tail: Option<AtomPath>) -> Self {
        Self { head, tail }
    }

    pub fn get(&self, end: ChainEnd) -> Option<&AtomPath> {
        match end {
            ChainEnd::Head => self.head.as_ref(),
            ChainEnd::Tail => self.tail.as_ref(),
        }
    }

    /// Iterates over the present links together with the end they sit on.
    pub fn iter(&self) -> impl Iterator<Item = (ChainEnd, &AtomPath)> {
        [ChainEnd::Head, ChainEnd::Tail]
            .into_iter()
            .filter_map(move |end| self.get(end).map(|atom| (end, atom)))
    }

    /// True when neither end links to a neighbouring group.
    pub fn is_open(&self) -> bool {
        self.head.is_none() && self.tail.is_none()
    }
}
