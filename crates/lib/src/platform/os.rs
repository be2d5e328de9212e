use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstantsError;

/// Operating system families the Pear runtime ships for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Os {
  #[serde(rename = "darwin")]
  Darwin,
  #[serde(rename = "linux")]
  Linux,
  #[serde(rename = "win32")]
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Result<Self, ConstantsError> {
    match std::env::consts::OS {
      "macos" => Ok(Self::Darwin),
      "linux" => Ok(Self::Linux),
      "windows" => Ok(Self::Windows),
      other => Err(ConstantsError::UnsupportedPlatform(other.to_string())),
    }
  }

  /// Returns the runtime identifier for this OS, as used in `by-arch` directories
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Darwin => "darwin",
      Self::Linux => "linux",
      Self::Windows => "win32",
    }
  }

  pub fn is_windows(&self) -> bool {
    matches!(self, Self::Windows)
  }

  pub fn is_linux(&self) -> bool {
    matches!(self, Self::Linux)
  }

  /// Native path separator for paths rendered for this OS
  pub fn separator(&self) -> char {
    match self {
      Self::Windows => '\\',
      Self::Darwin | Self::Linux => '/',
    }
  }
}

impl FromStr for Os {
  type Err = ConstantsError;

  /// Accepts runtime names (`win32`) as well as Rust target names (`windows`, `macos`)
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "darwin" | "macos" => Ok(Self::Darwin),
      "linux" => Ok(Self::Linux),
      "win32" | "windows" => Ok(Self::Windows),
      other => Err(ConstantsError::UnsupportedPlatform(other.to_string())),
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  #[cfg(any(target_os = "linux", target_os = "macos", target_os = "windows"))]
  fn current_returns_supported_os() {
    assert!(Os::current().is_ok(), "Current OS should be supported");
  }

  #[test]
  fn windows_uses_win32_identifier() {
    assert_eq!(Os::Windows.as_str(), "win32");
    assert_eq!("win32".parse::<Os>().unwrap(), Os::Windows);
    assert_eq!("windows".parse::<Os>().unwrap(), Os::Windows);
  }

  #[test]
  fn unknown_os_is_rejected() {
    assert_eq!("freebsd".parse::<Os>(), Err(ConstantsError::UnsupportedPlatform("freebsd".to_string())));
  }

  #[test]
  fn separators() {
    assert_eq!(Os::Windows.separator(), '\\');
    assert_eq!(Os::Linux.separator(), '/');
    assert_eq!(Os::Darwin.separator(), '/');
  }

  #[test]
  fn class_flags() {
    assert!(Os::Windows.is_windows());
    assert!(!Os::Windows.is_linux());
    assert!(Os::Linux.is_linux());
    assert!(!Os::Darwin.is_linux() && !Os::Darwin.is_windows());
  }
}
