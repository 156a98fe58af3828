//! Content hashing with domain separation.
//!
//! Algorithm: SHA-256 over `domain || data`. Result format
//! `"sha256:<hex_digest>"`. This is the only place the workspace hashes.

use sha2::{Digest, Sha256};

/// Domain prefix for world-state fingerprints.
pub const DOMAIN_WORLD_STATE: &[u8] = b"GRIPPER::WORLD_STATE::V1\0";

/// Domain prefix for search graph digests.
pub const DOMAIN_SEARCH_GRAPH: &[u8] = b"GRIPPER::SEARCH_GRAPH::V1\0";

/// Domain prefix for plan report digests.
pub const DOMAIN_PLAN_REPORT: &[u8] = b"GRIPPER::PLAN_REPORT::V1\0";

/// A content-addressed hash in `"algorithm:hex_digest"` form.
///
/// Invariant: exactly one `:` with non-empty text on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"`. `None` when malformed.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon + 1 == s.len() || s[colon + 1..].contains(':') {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{digest}"),
    }
}
