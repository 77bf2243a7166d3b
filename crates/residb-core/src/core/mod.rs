//! # Core Module
//!
//! This module provides the fundamental data structures and operations of residb: the
//! residue/fragment data model, the definition table that stores and resolves it, and the
//! checks that keep authoring mistakes out of downstream simulations.
//!
//! ## Architecture
//!
//! - **Data Model** ([`models`]) - Atom paths, bonds, chain links, group definitions and their
//!   flattened (resolved) form
//! - **Definition Table** ([`table`]) - Name/symbol lookup, composition-aware resolution with cycle
//!   detection, the embedded built-in database and an atomically swappable shared handle
//! - **Validation** ([`validation`]) - Charge coverage, dangling references and other invariant checks
//! - **File I/O** ([`io`]) - TOML declaration files and CSV atom tables
//! - **Utilities** ([`utils`]) - Chemical element symbols
//!
//! ## Data Lifecycle
//!
//! Definitions are loaded once, held as immutable process-wide reference data and never
//! mutated. Every error is an authoring-time data error, surfaced at load or resolve time.

pub mod io;
pub mod models;
pub mod table;
pub mod utils;
pub mod validation;
