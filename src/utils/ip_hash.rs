//! One-way hashing of client addresses for click analytics.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of `ip`.
pub fn hash_ip(ip: &str) -> String {
    hex::encode(Sha256::digest(ip.as_bytes()))
}
