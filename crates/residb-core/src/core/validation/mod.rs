//! # Validation Module
//!
//! Pure checks of a resolved group against the invariants of the definition format.
//!
//! ## Overview
//!
//! Validation never fails and never mutates: it returns every [`ValidationIssue`] it finds so
//! that whoever maintains the definition table sees all problems at once. Each issue carries a
//! [`Severity`]; errors make a group unusable for simulation (an uncharged atom silently yields
//! physically invalid energies), warnings are findings worth a look.
//!
//! ## Checks
//!
//! - **Charge coverage** - every charge set covers every atom, and nothing else
//! - **Bond references** - both atoms of every bond exist; no atom is bonded to itself
//! - **Chain links** - present link atoms exist
//! - **Atom types** - every typed atom exists; untyped atoms are reported as warnings
//! - **PDB maps** - mapped atoms exist; alternative names point at a mapped canonical name
//! - **Elements** - element symbols are known chemical elements

mod checks;
mod issue;

pub use checks::validate;
pub use issue::{Severity, ValidationIssue};
