//! pear-constants: process-wide constants for the Pear runtime
//!
//! Derives paths, the IPC socket address, executable locations and fixed
//! timeouts from three inputs:
//! - the mount URL of the running bundle
//! - the `Checkout` metadata (release vs. local development)
//! - the target `Platform` (OS and architecture)
//!
//! Resolution is pure and deterministic. Independent processes that resolve
//! the same inputs agree on every value, including the socket address.

pub mod checkout;
pub mod config;
pub mod consts;
pub mod error;
pub mod mount;
pub mod platform;
pub mod resolve;
pub mod util;

pub use checkout::Checkout;
pub use config::{InputOverrides, ResolverInputs};
pub use error::ConstantsError;
pub use platform::Platform;
pub use platform::arch::Arch;
pub use platform::os::Os;
pub use resolve::{Constants, resolve};
