pub mod arch;
pub mod exec;
pub mod os;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConstantsError;
use arch::Arch;
use exec::Executables;
use os::Os;

/// Platform identifier combining OS and architecture (e.g., "linux-x64")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Platform {
  pub os: Os,
  pub arch: Arch,
}

impl Platform {
  /// Create a new platform identifier
  pub fn new(os: Os, arch: Arch) -> Self {
    Self { os, arch }
  }

  /// Detect the current platform at runtime
  pub fn current() -> Result<Self, ConstantsError> {
    Ok(Self {
      os: Os::current()?,
      arch: Arch::current()?,
    })
  }

  /// Parse a platform from runtime names such as `("win32", "x64")`
  pub fn parse(os: &str, arch: &str) -> Result<Self, ConstantsError> {
    Ok(Self {
      os: os.parse()?,
      arch: arch.parse()?,
    })
  }

  /// Returns the host string used for `by-arch` directories (e.g., "darwin-arm64")
  pub fn host(&self) -> String {
    format!("{}-{}", self.os, self.arch)
  }

  pub fn is_windows(&self) -> bool {
    self.os.is_windows()
  }

  pub fn is_linux(&self) -> bool {
    self.os.is_linux()
  }

  pub fn executables(&self) -> Executables {
    Executables::for_os(self.os)
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.host())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn host_format() {
    // Verifies the host format is "os-arch" with runtime names
    let platform = Platform::new(Os::Darwin, Arch::Arm64);
    assert_eq!(platform.host(), "darwin-arm64");

    let platform = Platform::new(Os::Windows, Arch::X64);
    assert_eq!(platform.host(), "win32-x64");
  }

  #[test]
  fn parse_reports_the_failing_half() {
    assert!(matches!(
      Platform::parse("plan9", "x64"),
      Err(ConstantsError::UnsupportedPlatform(_))
    ));
    assert!(matches!(
      Platform::parse("linux", "mips"),
      Err(ConstantsError::UnsupportedArch(_))
    ));
  }
}
