//! Error types for pear-constants

use thiserror::Error;

/// Errors raised while resolving Pear constants.
///
/// Every variant is fatal: downstream components rely on exact values, so
/// nothing here is ever defaulted or retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstantsError {
  #[error("invalid mount URL {url:?}: {reason}")]
  InvalidMountUrl { url: String, reason: String },

  #[error("unsupported platform: {0}")]
  UnsupportedPlatform(String),

  #[error("unsupported architecture: {0}")]
  UnsupportedArch(String),

  #[error("environment variable {0} is not set")]
  MissingEnv(&'static str),

  #[error("environment variable {var} has invalid value {value:?}")]
  InvalidEnv { var: &'static str, value: String },
}

impl ConstantsError {
  pub(crate) fn mount(url: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::InvalidMountUrl {
      url: url.into(),
      reason: reason.into(),
    }
  }
}
