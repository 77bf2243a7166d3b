//! # File I/O Module
//!
//! Reading and writing the files a definition table is authored in and exported to.
//!
//! - [`declaration`] - One group per TOML declaration file
//! - [`atom_table`] - Flat CSV atom tables of resolved groups

pub mod atom_table;
pub mod declaration;
