//! World model: objects, catalog, and immutable state snapshots.
//!
//! Depends on `proof::hash` for fingerprints only.

pub mod objects;
pub mod state;
