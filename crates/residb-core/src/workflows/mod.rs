//! # Workflows Module
//!
//! High-level procedures built on the [`core`](crate::core) layer, intended as the entry
//! points for tooling that maintains a definition table.
//!
//! - [`audit`] - Resolve and validate many groups at once, collecting every finding
//! - [`progress`] - Progress events and an optional reporting callback

pub mod audit;
pub mod progress;
