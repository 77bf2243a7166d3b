//! # Definition Table Module
//!
//! This module stores group definitions and turns them into flattened records.
//!
//! ## Overview
//!
//! Definitions are registered once, by unique name and optional unique symbol, and are
//! never mutated afterwards. Resolution expands a definition and its components (looked up
//! by name, transitively) into a [`ResolvedGroup`](crate::core::models::resolved::ResolvedGroup),
//! rejecting unknown groups, missing components and composition cycles.
//!
//! ## Key Components
//!
//! - [`registry`] - The [`registry::DefinitionTable`] itself: insertion, lookup, directory loading
//! - [`resolver`] - Composition-aware flattening with cycle detection
//! - [`builtin`] - The definition database embedded in the library
//! - [`shared`] - A handle for concurrent readers with whole-table hot swap
//! - [`error`] - Errors raised while building or resolving a table
//!
//! ## Usage
//!
//! ```ignore
//! use residb::core::table::registry::DefinitionTable;
//!
//! let table = DefinitionTable::load_dir("groups/".as_ref())?;
//! let dc3 = table.resolve("d-cytosine_3ter")?;
//! assert!(dc3.chain_links.tail.is_none());
//! ```

pub mod builtin;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod shared;
