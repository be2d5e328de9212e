//! Executable names shipped in each `by-arch/<host>/bin` directory.

use super::os::Os;

/// File names of the runtime and launcher, relative to the bin directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Executables {
  pub runtime: &'static str,
  pub wakeup: &'static str,
}

impl Executables {
  pub const fn for_os(os: Os) -> Self {
    match os {
      Os::Windows => Self {
        runtime: "pear-runtime.exe",
        wakeup: "pear.exe",
      },
      Os::Linux => Self {
        runtime: "pear-runtime",
        wakeup: "pear",
      },
      Os::Darwin => Self {
        runtime: "pear-runtime",
        wakeup: "Pear.app/Contents/MacOS/Pear",
      },
    }
  }
}
