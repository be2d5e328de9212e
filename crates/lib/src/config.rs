//! Resolver inputs, assembled explicitly or from the environment.

use std::env::VarError;
use std::str::FromStr;

use crate::checkout::Checkout;
use crate::error::ConstantsError;
use crate::platform::Platform;
use crate::platform::arch::Arch;
use crate::platform::os::Os;
use crate::resolve::{Constants, resolve};

pub const MOUNT_ENV: &str = "PEAR_MOUNT";
pub const CHECKOUT_FORK_ENV: &str = "PEAR_CHECKOUT_FORK";
pub const CHECKOUT_LENGTH_ENV: &str = "PEAR_CHECKOUT_LENGTH";
pub const CHECKOUT_KEY_ENV: &str = "PEAR_CHECKOUT_KEY";
pub const PLATFORM_ENV: &str = "PEAR_PLATFORM";
pub const ARCH_ENV: &str = "PEAR_ARCH";

/// Explicit values that take precedence over the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputOverrides {
  pub mount: Option<String>,
  pub fork: Option<u64>,
  pub length: Option<u64>,
  pub key: Option<String>,
  pub platform: Option<String>,
  pub arch: Option<String>,
}

/// Everything [`resolve`] needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverInputs {
  pub mount_url: String,
  pub checkout: Checkout,
  pub platform: Platform,
}

impl ResolverInputs {
  pub fn new(mount_url: impl Into<String>, checkout: Checkout, platform: Platform) -> Self {
    Self {
      mount_url: mount_url.into(),
      checkout,
      platform,
    }
  }

  /// Read inputs from `PEAR_*` environment variables
  ///
  /// `PEAR_MOUNT` is required. Platform and architecture fall back to the
  /// current host when `PEAR_PLATFORM` / `PEAR_ARCH` are unset.
  pub fn from_env() -> Result<Self, ConstantsError> {
    Self::from_env_with(InputOverrides::default())
  }

  /// Like [`ResolverInputs::from_env`], but values present in `overrides`
  /// win over their environment variables, which are then never read.
  pub fn from_env_with(overrides: InputOverrides) -> Result<Self, ConstantsError> {
    let mount_url = match overrides.mount {
      Some(mount) => mount,
      None => read_env(MOUNT_ENV)?.ok_or(ConstantsError::MissingEnv(MOUNT_ENV))?,
    };

    let checkout = Checkout {
      fork: overrides.fork.map_or_else(|| parse_env(CHECKOUT_FORK_ENV), |v| Ok(Some(v)))?,
      length: overrides.length.map_or_else(|| parse_env(CHECKOUT_LENGTH_ENV), |v| Ok(Some(v)))?,
      key: overrides.key.map_or_else(|| read_env(CHECKOUT_KEY_ENV), |v| Ok(Some(v)))?,
    };

    let os_name = overrides.platform.map_or_else(|| read_env(PLATFORM_ENV), |v| Ok(Some(v)))?;
    let arch_name = overrides.arch.map_or_else(|| read_env(ARCH_ENV), |v| Ok(Some(v)))?;
    let platform = match (os_name, arch_name) {
      (None, None) => Platform::current()?,
      (os, arch) => Platform::new(
        os.map_or_else(Os::current, |name| name.parse())?,
        arch.map_or_else(Arch::current, |name| name.parse())?,
      ),
    };

    Ok(Self {
      mount_url,
      checkout,
      platform,
    })
  }

  pub fn resolve(&self) -> Result<Constants, ConstantsError> {
    resolve(&self.mount_url, &self.checkout, self.platform)
  }
}

/// Read `var`, treating only an absent variable as unset
fn read_env(var: &'static str) -> Result<Option<String>, ConstantsError> {
  match std::env::var(var) {
    Ok(value) => Ok(Some(value)),
    Err(VarError::NotPresent) => Ok(None),
    Err(VarError::NotUnicode(value)) => Err(ConstantsError::InvalidEnv {
      var,
      value: value.to_string_lossy().into_owned(),
    }),
  }
}

fn parse_env<T: FromStr>(var: &'static str) -> Result<Option<T>, ConstantsError> {
  match read_env(var)? {
    Some(value) => value
      .parse()
      .map(Some)
      .map_err(|_| ConstantsError::InvalidEnv { var, value }),
    None => Ok(None),
  }
}
