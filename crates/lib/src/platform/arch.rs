use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConstantsError;

/// CPU architecture variants the Pear runtime ships for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
  X64,
  Arm64,
  Ia32,
  Arm,
}

impl Arch {
  /// Detect the current CPU architecture at runtime
  pub fn current() -> Result<Self, ConstantsError> {
    match std::env::consts::ARCH {
      "x86_64" => Ok(Self::X64),
      "aarch64" => Ok(Self::Arm64),
      "x86" => Ok(Self::Ia32),
      "arm" => Ok(Self::Arm),
      other => Err(ConstantsError::UnsupportedArch(other.to_string())),
    }
  }

  /// Returns the runtime identifier for this architecture
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::X64 => "x64",
      Self::Arm64 => "arm64",
      Self::Ia32 => "ia32",
      Self::Arm => "arm",
    }
  }
}

impl FromStr for Arch {
  type Err = ConstantsError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "x64" | "x86_64" => Ok(Self::X64),
      "arm64" | "aarch64" => Ok(Self::Arm64),
      "ia32" | "x86" => Ok(Self::Ia32),
      "arm" => Ok(Self::Arm),
      other => Err(ConstantsError::UnsupportedArch(other.to_string())),
    }
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rust_target_names_map_to_runtime_names() {
    assert_eq!("x86_64".parse::<Arch>().unwrap().as_str(), "x64");
    assert_eq!("aarch64".parse::<Arch>().unwrap().as_str(), "arm64");
  }

  #[test]
  fn unknown_arch_is_rejected() {
    assert_eq!("riscv64".parse::<Arch>(), Err(ConstantsError::UnsupportedArch("riscv64".to_string())));
  }
}
