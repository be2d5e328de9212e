mod get;
mod show;

pub use get::cmd_get;
pub use show::cmd_show;

use anyhow::{Context, Result};
use clap::Args;
use pear_constants::{Constants, InputOverrides, ResolverInputs};
use tracing::debug;

/// Resolver inputs. Each flag overrides the matching `PEAR_*` variable.
#[derive(Debug, Default, Args)]
pub struct InputArgs {
  /// Mount URL of the running bundle (overrides PEAR_MOUNT)
  #[arg(long, global = true)]
  mount: Option<String>,

  /// Checkout length; omit for a local development checkout
  #[arg(long, global = true)]
  checkout_length: Option<u64>,

  /// Checkout fork
  #[arg(long, global = true)]
  checkout_fork: Option<u64>,

  /// Checkout key
  #[arg(long, global = true)]
  checkout_key: Option<String>,

  /// Target platform (darwin, linux, win32)
  #[arg(long, global = true)]
  platform: Option<String>,

  /// Target architecture (x64, arm64, ia32, arm)
  #[arg(long, global = true)]
  arch: Option<String>,
}

impl InputArgs {
  pub fn resolve(self) -> Result<Constants> {
    let inputs = ResolverInputs::from_env_with(self.into_overrides())
      .context("Failed to read inputs (pass --mount or set PEAR_MOUNT)")?;
    debug!(mount = %inputs.mount_url, platform = %inputs.platform, "resolving constants");
    inputs.resolve().context("Failed to resolve constants")
  }

  fn into_overrides(self) -> InputOverrides {
    InputOverrides {
      mount: self.mount,
      fork: self.checkout_fork,
      length: self.checkout_length,
      key: self.checkout_key,
      platform: self.platform,
      arch: self.arch,
    }
  }
}
