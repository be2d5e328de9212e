//! Derivation of the process-wide Pear constants.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::checkout::Checkout;
use crate::consts::{
  APPLINGS_REL, CONNECT_TIMEOUT, GC_REL, IDLE_TIMEOUT, IPC_ID, KNOWN_NODES_LIMIT, LOCALDEV_PLATFORM_REL,
  PLATFORM_CORESTORE_REL, PLATFORM_HYPERDB_REL, PLATFORM_LOCK_REL, RELEASE_PLATFORM_REL, SALT, SPINDOWN_TIMEOUT,
  UPGRADE_LOCK_REL,
};
use crate::error::ConstantsError;
use crate::mount::{Mount, join, to_native_path};
use crate::platform::Platform;
use crate::platform::os::Os;
use crate::util::hash::pipe_id;

/// Immutable record of every derived constant.
///
/// Built once by [`resolve`]. Two processes given the same inputs produce
/// field-for-field identical records, which is what lets them meet at the
/// same socket and lock file without talking to each other first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Constants {
  swap: PathBuf,
  localdev: bool,
  checkout: Checkout,
  host: String,
  platform_dir: PathBuf,
  platform_lock: PathBuf,
  platform_corestore: PathBuf,
  platform_hyperdb: PathBuf,
  gc: PathBuf,
  upgrade_lock: PathBuf,
  applings_path: PathBuf,
  mount: String,
  #[serde(serialize_with = "as_hex")]
  salt: [u8; 32],
  socket_path: String,
  runtime: PathBuf,
  wakeup: PathBuf,
  #[serde(serialize_with = "as_millis")]
  connect_timeout: Duration,
  #[serde(serialize_with = "as_millis")]
  idle_timeout: Duration,
  #[serde(serialize_with = "as_millis")]
  spindown_timeout: Duration,
  known_nodes_limit: usize,
}

impl Constants {
  /// Writable working root
  pub fn swap(&self) -> &Path {
    &self.swap
  }

  /// True when running from a local development checkout
  pub fn localdev(&self) -> bool {
    self.localdev
  }

  pub fn checkout(&self) -> &Checkout {
    &self.checkout
  }

  /// `{platform}-{arch}`, e.g. `linux-x64`
  pub fn host(&self) -> &str {
    &self.host
  }

  /// Root of the installed runtime's shared state
  pub fn platform_dir(&self) -> &Path {
    &self.platform_dir
  }

  /// Lock file guarding the platform corestore
  pub fn platform_lock(&self) -> &Path {
    &self.platform_lock
  }

  pub fn platform_corestore(&self) -> &Path {
    &self.platform_corestore
  }

  pub fn platform_hyperdb(&self) -> &Path {
    &self.platform_hyperdb
  }

  pub fn gc(&self) -> &Path {
    &self.gc
  }

  pub fn upgrade_lock(&self) -> &Path {
    &self.upgrade_lock
  }

  pub fn applings_path(&self) -> &Path {
    &self.applings_path
  }

  /// Canonical mount href without its trailing slash
  pub fn mount(&self) -> &str {
    &self.mount
  }

  pub fn salt(&self) -> &[u8; 32] {
    &self.salt
  }

  /// Named pipe on Windows, unix socket path elsewhere
  pub fn socket_path(&self) -> &str {
    &self.socket_path
  }

  pub fn runtime(&self) -> &Path {
    &self.runtime
  }

  pub fn wakeup(&self) -> &Path {
    &self.wakeup
  }

  pub fn connect_timeout(&self) -> Duration {
    self.connect_timeout
  }

  pub fn idle_timeout(&self) -> Duration {
    self.idle_timeout
  }

  pub fn spindown_timeout(&self) -> Duration {
    self.spindown_timeout
  }

  pub fn known_nodes_limit(&self) -> usize {
    self.known_nodes_limit
  }
}

/// Derive the constants for a mount, checkout and platform.
///
/// Pure: no filesystem access, no environment reads.
pub fn resolve(mount_url: &str, checkout: &Checkout, platform: Platform) -> Result<Constants, ConstantsError> {
  let mount = Mount::parse(mount_url)?;
  let os = platform.os;

  let swap_url = mount.swap_url()?;
  let localdev = checkout.is_localdev();
  let platform_rel = if localdev {
    LOCALDEV_PLATFORM_REL
  } else {
    RELEASE_PLATFORM_REL
  };
  let platform_url = join(&swap_url, platform_rel)?;
  let under_platform = |rel: &str| -> Result<PathBuf, ConstantsError> {
    Ok(PathBuf::from(to_native_path(&join(&platform_url, rel)?, os)?))
  };

  let platform_dir = to_native_path(&platform_url, os)?;
  let host = platform.host();
  let bin = format!("by-arch/{host}/bin/");
  let exec = platform.executables();
  let under_bin = |name: &str| -> Result<PathBuf, ConstantsError> {
    Ok(PathBuf::from(to_native_path(&join(&swap_url, &format!("{bin}{name}"))?, os)?))
  };

  let constants = Constants {
    swap: PathBuf::from(to_native_path(&swap_url, os)?),
    localdev,
    checkout: checkout.clone(),
    platform_lock: under_platform(PLATFORM_LOCK_REL)?,
    platform_corestore: under_platform(PLATFORM_CORESTORE_REL)?,
    platform_hyperdb: under_platform(PLATFORM_HYPERDB_REL)?,
    gc: under_platform(GC_REL)?,
    upgrade_lock: under_platform(UPGRADE_LOCK_REL)?,
    applings_path: under_platform(APPLINGS_REL)?,
    mount: mount.href().to_string(),
    salt: SALT,
    socket_path: socket_path(&platform_dir, os),
    runtime: under_bin(exec.runtime)?,
    wakeup: under_bin(exec.wakeup)?,
    connect_timeout: CONNECT_TIMEOUT,
    idle_timeout: IDLE_TIMEOUT,
    spindown_timeout: SPINDOWN_TIMEOUT,
    known_nodes_limit: KNOWN_NODES_LIMIT,
    platform_dir: PathBuf::from(platform_dir),
    host,
  };

  debug!(
    mount = %constants.mount,
    host = %constants.host,
    localdev,
    platform_dir = ?constants.platform_dir,
    "resolved pear constants"
  );

  Ok(constants)
}

/// IPC endpoint for a platform directory
pub fn socket_path(platform_dir: &str, os: Os) -> String {
  match os {
    Os::Windows => format!(r"\\.\pipe\{IPC_ID}-{}", pipe_id(platform_dir)),
    Os::Darwin | Os::Linux => format!("{platform_dir}/{IPC_ID}.sock"),
  }
}

fn as_hex<S: Serializer>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_str(&hex::encode(bytes))
}

fn as_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
  let millis = u64::try_from(duration.as_millis()).map_err(serde::ser::Error::custom)?;
  serializer.serialize_u64(millis)
}
