//! # Core Models Module
//!
//! This module contains the data structures that describe residue and fragment definitions.
//!
//! ## Overview
//!
//! A definition ([`group::GroupDefinition`]) declares atoms, bonds, chain links, force-field
//! parameter sets and PDB naming maps. It may also compose other definitions by name. Atom
//! references that reach into components are dotted paths ([`atom::AtomPath`]). Resolution
//! turns a definition and its components into a single flattened [`resolved::ResolvedGroup`].
//!
//! ## Key Components
//!
//! - [`atom`] - Qualified atom references (`sugar.O_5`)
//! - [`topology`] - Unordered bonds and polymer chain links
//! - [`group`] - The declarative group definition as written in declaration files
//! - [`resolved`] - The flattened, fully-qualified view of a group
//! - [`ids`] - Stable identifiers for groups stored in the definition table
//!
//! ## Usage
//!
//! ```ignore
//! use residb::core::models::atom::AtomPath;
//!
//! let path: AtomPath = "sugar.O_5".parse()?;
//! assert_eq!(path.atom_name(), "O_5");
//! assert_eq!(path.components(), &["sugar".to_string()]);
//! ```

pub mod atom;
pub mod group;
pub mod ids;
pub mod resolved;
pub mod topology;
