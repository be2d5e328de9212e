//! Hashing for cross-process identifiers.
//!
//! The digest is BLAKE2b with a 32-byte output and no key, which is the same
//! function as libsodium's `crypto_generichash` at its default length. Any
//! process that hashes the same string, in any language, derives the same id.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};

type Blake2b256 = Blake2b<U32>;

/// A full 64-character BLAKE2b-256 digest in lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub String);

impl std::fmt::Display for ContentHash {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Hash arbitrary bytes.
pub fn hash_bytes(data: &[u8]) -> ContentHash {
  let mut hasher = Blake2b256::new();
  hasher.update(data);
  ContentHash(format!("{:x}", hasher.finalize()))
}

/// Identifier for the IPC endpoint belonging to a platform directory.
pub fn pipe_id(platform_dir: &str) -> ContentHash {
  hash_bytes(platform_dir.as_bytes())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_matches_reference_vector() {
    assert_eq!(hash_bytes(b"").0, "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8");
  }

  #[test]
  fn pipe_id_is_deterministic() {
    let a = pipe_id("/opt/app/pear");
    let b = pipe_id("/opt/app/pear");
    assert_eq!(a, b);
    assert_eq!(a.0.len(), 64);
    assert!(a.0.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  }

  #[test]
  fn pipe_id_changes_with_directory() {
    assert_ne!(pipe_id("/opt/app/pear"), pipe_id("/opt/other/pear"));
  }
}
