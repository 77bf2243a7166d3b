use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const PATH_SEPARATOR: char = '.';

/// A qualified reference to an atom, possibly reaching into named components.
///
/// The last segment is the atom name; the preceding segments are component role names,
/// outermost first. `"O_5"` refers to a local atom, `"sugar.O_5"` to atom `O_5` of the
/// component bound to the role `sugar`, and `"nucleotide.sugar.O_5"` goes one level deeper.
///
/// Paths are written and parsed in their dotted form, which is also how they appear as keys
/// and values in declaration files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AtomPath {
    /// Role segments followed by the atom name. Never empty.
    segments: Vec<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAtomPathError {
    #[error("Atom reference cannot be empty")]
    Empty,
    #[error("Atom reference '{0}' contains an empty segment")]
    EmptySegment(String),
    #[error("Atom reference '{0}' contains whitespace")]
    Whitespace(String),
    #[error("Atom reference segment '{0}' contains the '.' separator")]
    Separator(String),
}

impl AtomPath {
    /// Builds a path from already-split segments.
    ///
    /// # Errors
    ///
    /// Returns `ParseAtomPathError` if there are no segments, or if any segment is empty,
    /// contains whitespace, or contains the `.` separator.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, ParseAtomPathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(ParseAtomPathError::Empty);
        }
        let joined = segments.join(".");
        for segment in &segments {
            if segment.is_empty() {
                return Err(ParseAtomPathError::EmptySegment(joined));
            }
            if segment.contains(PATH_SEPARATOR) {
                return Err(ParseAtomPathError::Separator(segment.clone()));
            }
            if segment.chars().any(char::is_whitespace) {
                return Err(ParseAtomPathError::Whitespace(joined));
            }
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The atom name, i.e. the last segment.
    pub fn atom_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The component roles leading to the atom, outermost first.
    pub fn components(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    pub fn is_local(&self) -> bool {
        self.segments.len() == 1
    }

    /// Returns this path as seen from a group that binds the owning group to `role`.
    pub fn prefixed(&self, role: &str) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(role.to_string());
        segments.extend(self.segments.iter().cloned());
        Self { segments }
    }
}

impl FromStr for AtomPath {
    type Err = ParseAtomPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseAtomPathError::Empty);
        }
        Self::from_segments(s.split(PATH_SEPARATOR))
    }
}

impl TryFrom<String> for AtomPath {
    type Error = ParseAtomPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AtomPath> for String {
    fn from(path: AtomPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for AtomPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", PATH_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Checks whether `role` can be used as a component role, i.e. as a path segment.
pub fn is_valid_role(role: &str) -> bool {
    !role.is_empty() && !role.contains(PATH_SEPARATOR) && !role.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> AtomPath {
        s.parse().unwrap()
    }

    #[test]
    fn parse_local_atom_reference() {
        let p = path("C_beta");
        assert!(p.is_local());
        assert_eq!(p.atom_name(), "C_beta");
        assert!(p.components().is_empty());
    }

    #[test]
    fn parse_nested_component_reference() {
        let p = path("nucleotide.sugar.O_5");
        assert!(!p.is_local());
        assert_eq!(p.atom_name(), "O_5");
        assert_eq!(
            p.components(),
            &["nucleotide".to_string(), "sugar".to_string()]
        );
    }

    #[test]
    fn parse_rejects_malformed_references() {
        assert_eq!("".parse::<AtomPath>(), Err(ParseAtomPathError::Empty));
        assert!(matches!(
            "sugar..O_5".parse::<AtomPath>(),
            Err(ParseAtomPathError::EmptySegment(_))
        ));
        assert!(matches!(
            ".O_5".parse::<AtomPath>(),
            Err(ParseAtomPathError::EmptySegment(_))
        ));
        assert!(matches!(
            "sugar.O 5".parse::<AtomPath>(),
            Err(ParseAtomPathError::Whitespace(_))
        ));
    }

    #[test]
    fn from_segments_rejects_separator_inside_segment() {
        let result = AtomPath::from_segments(["sugar.O_5"]);
        assert_eq!(
            result,
            Err(ParseAtomPathError::Separator("sugar.O_5".to_string()))
        );
        assert_eq!(
            AtomPath::from_segments(Vec::<String>::new()),
            Err(ParseAtomPathError::Empty)
        );
    }

    #[test]
    fn display_joins_segments_with_dots() {
        assert_eq!(path("sugar.O_5").to_string(), "sugar.O_5");
        assert_eq!(path("P").to_string(), "P");
    }

    #[test]
    fn prefixed_adds_outermost_role() {
        let p = path("sugar.O_5").prefixed("nucleotide");
        assert_eq!(p, path("nucleotide.sugar.O_5"));
        assert_eq!(path("P").prefixed("phosphate"), path("phosphate.P"));
    }

    #[test]
    fn ordering_is_by_segments() {
        assert!(path("base.N_1") < path("phosphate.P"));
        assert!(path("sugar.C_1") < path("sugar.C_2"));
    }

    #[test]
    fn role_validity_matches_segment_rules() {
        assert!(is_valid_role("sugar"));
        assert!(!is_valid_role(""));
        assert!(!is_valid_role("a.b"));
        assert!(!is_valid_role("a b"));
    }
}
