//! Proof module: canonical hashing, canonical JSON, plan replay.

pub mod canon;
pub mod hash;
pub mod replay;
