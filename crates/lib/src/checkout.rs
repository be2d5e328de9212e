use serde::{Deserialize, Serialize};

/// Where the running code came from.
///
/// A packaged release carries the fork and length of the drive it was staged
/// from. A local development tree has no length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checkout {
  pub fork: Option<u64>,
  pub length: Option<u64>,
  pub key: Option<String>,
}

impl Checkout {
  /// Checkout of a local development tree
  pub fn local() -> Self {
    Self::default()
  }

  /// Checkout of a staged release at `fork`/`length`
  pub fn release(fork: u64, length: u64) -> Self {
    Self {
      fork: Some(fork),
      length: Some(length),
      key: None,
    }
  }

  pub fn with_key(mut self, key: impl Into<String>) -> Self {
    self.key = Some(key.into());
    self
  }

  /// True when running from a local development tree
  pub fn is_localdev(&self) -> bool {
    self.length.is_none()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn localdev_is_decided_by_length_alone() {
    assert!(Checkout::local().is_localdev());
    assert!(!Checkout::release(0, 42).is_localdev());

    let forked_dev = Checkout {
      fork: Some(3),
      length: None,
      key: Some("/some/path".to_string()),
    };
    assert!(forked_dev.is_localdev());
  }
}
