//! Content-addressed hashing for report artifacts.
//!
//! **Exactly one place** defines canonical hashing in this workspace.
//! Algorithm: SHA-256 for all V1 artifacts. Every hash computation selects
//! a domain separator so that identical bytes hashed for different purposes
//! can never collide.

use sha2::{Digest as _, Sha256};

/// Domain prefix for demo report hashing.
pub const DOMAIN_DEMO_REPORT: &[u8] = b"PRIMER::DEMO_REPORT::V1\0";

/// Domain prefix for rendered move-log hashing.
/// Distinct from `DOMAIN_DEMO_REPORT` to prevent cross-domain collisions.
pub const DOMAIN_MOVE_LOG: &[u8] = b"PRIMER::MOVE_LOG::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: the inner string always contains exactly one `:` separator
/// with non-empty substrings on both sides (enforced by
/// [`ContentHash::parse`] and by construction in [`canonical_hash`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the format is invalid (missing colon, empty
    /// algorithm, or empty digest).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
        })
    }

    /// The algorithm portion (e.g., `"sha256"`).
    #[must_use]
    pub fn algorithm(&self) -> &str {
        self.full.split_once(':').map_or("", |(alg, _)| alg)
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        self.full.split_once(':').map_or("", |(_, hex)| hex)
    }

    /// The full string representation (`"algorithm:hex_digest"`).
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

/// Compute the canonical hash of a byte slice with domain separation.
///
/// Algorithm: SHA-256 over `domain || data`.
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let digest = hasher.finalize();
    ContentHash {
        full: format!("sha256:{}", hex::encode(digest)),
    }
}
