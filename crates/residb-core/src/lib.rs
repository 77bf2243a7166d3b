//! # residb Core Library
//!
//! A library of molecular-mechanics residue and fragment definitions, the building blocks
//! (nucleotides, amino-acid sidechains, ...) from which biomolecular structures are assembled
//! for simulation software.
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers:
//!
//! - **[`core`]: The Foundation.** Contains the immutable data model (`GroupDefinition`,
//!   `ResolvedGroup`), the definition table with composition-aware resolution, the invariant
//!   checks, and declaration file I/O.
//!
//! - **[`workflows`]: The Public API.** Ties the `core` pieces together into maintainer-facing
//!   procedures, such as auditing an entire definition table with progress reporting.
//!
//! ## Quick Start
//!
//! ```ignore
//! use residb::core::table::registry::DefinitionTable;
//! use residb::core::validation::validate;
//!
//! let table = DefinitionTable::builtin().map_err(|e| e.to_string())?;
//! let thymine = table.resolve("d-thymine")?;
//! assert!(validate(&thymine).is_empty());
//! ```

pub mod core;
pub mod workflows;
