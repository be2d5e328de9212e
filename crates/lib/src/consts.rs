//! Fixed values shared by every Pear process.
//!
//! Nothing in here depends on the mount, checkout or platform. Two processes
//! built from the same crate version always agree on these.

use std::time::Duration;

/// Prefix for IPC endpoints and the unix socket file stem.
pub const IPC_ID: &str = "pear";

/// Application-wide domain-separation salt.
pub const SALT: [u8; 32] = [
  0xd1, 0x34, 0xaa, 0x8b, 0x06, 0x31, 0xf1, 0x19, 0x3b, 0x50, 0x31, 0xb3, 0x56, 0xd8, 0x2d, 0xbe,
  0xa2, 0x14, 0x38, 0x92, 0x08, 0xfa, 0x4a, 0x0b, 0xcd, 0xf5, 0xc2, 0xe0, 0x62, 0xd8, 0xce, 0xd2,
];

/// Milliseconds a client waits for the sidecar to accept a connection.
pub const CONNECT_TIMEOUT_MS: u64 = 20_000;

/// Milliseconds without clients before the sidecar starts winding down.
pub const IDLE_TIMEOUT_MS: u64 = 30_000;

/// Milliseconds the sidecar lingers after winding down before it exits.
pub const SPINDOWN_TIMEOUT_MS: u64 = 60_000;

/// Maximum number of DHT nodes remembered between runs.
pub const KNOWN_NODES_LIMIT: usize = 100;

pub const CONNECT_TIMEOUT: Duration = Duration::from_millis(CONNECT_TIMEOUT_MS);
pub const IDLE_TIMEOUT: Duration = Duration::from_millis(IDLE_TIMEOUT_MS);
pub const SPINDOWN_TIMEOUT: Duration = Duration::from_millis(SPINDOWN_TIMEOUT_MS);

/// Suffix marking a mount that sits inside a `.bundle` directory.
pub(crate) const BUNDLE_SUFFIX: &str = ".bundle/";

/// Platform directory relative to SWAP in a local development checkout.
pub(crate) const LOCALDEV_PLATFORM_REL: &str = "pear/";

/// Platform directory relative to SWAP in an installed release.
pub(crate) const RELEASE_PLATFORM_REL: &str = "../../../";

pub(crate) const PLATFORM_LOCK_REL: &str = "corestores/platform/db/LOCK";
pub(crate) const PLATFORM_CORESTORE_REL: &str = "corestores/platform";
pub(crate) const PLATFORM_HYPERDB_REL: &str = "db";
pub(crate) const GC_REL: &str = "gc";
pub(crate) const UPGRADE_LOCK_REL: &str = "lock";
pub(crate) const APPLINGS_REL: &str = "applings";
