//! Snapshot digest
//!
//! Identifies the exact snapshot text a report was produced from.

use sha2::{Digest, Sha256};

/// SHA256 hex digest of the raw snapshot content
pub fn snapshot_digest(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
