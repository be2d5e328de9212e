//! Show command implementation.
//!
//! Prints every derived constant, as labelled text or as JSON.

use anyhow::Result;
use pear_constants::Constants;

use crate::output::{OutputFormat, print_json, print_stat, print_success};

pub fn cmd_show(constants: &Constants, format: OutputFormat) -> Result<()> {
  if format.is_json() {
    return print_json(constants);
  }

  let checkout = constants.checkout();
  let opt = |v: Option<u64>| v.map_or_else(|| "null".to_string(), |n| n.to_string());

  print_success(&format!("Pear constants for {}", constants.mount()));
  println!();
  print_stat("HOST", constants.host());
  print_stat("LOCALDEV", &constants.localdev().to_string());
  print_stat("CHECKOUT", &format!("fork={} length={}", opt(checkout.fork), opt(checkout.length)));
  println!();
  print_stat("SWAP", &constants.swap().display().to_string());
  print_stat("PLATFORM_DIR", &constants.platform_dir().display().to_string());
  print_stat("PLATFORM_LOCK", &constants.platform_lock().display().to_string());
  print_stat("PLATFORM_CORESTORE", &constants.platform_corestore().display().to_string());
  print_stat("PLATFORM_HYPERDB", &constants.platform_hyperdb().display().to_string());
  print_stat("GC", &constants.gc().display().to_string());
  print_stat("UPGRADE_LOCK", &constants.upgrade_lock().display().to_string());
  print_stat("APPLINGS_PATH", &constants.applings_path().display().to_string());
  print_stat("SOCKET_PATH", constants.socket_path());
  print_stat("RUNTIME", &constants.runtime().display().to_string());
  print_stat("WAKEUP", &constants.wakeup().display().to_string());
  println!();
  print_stat("SALT", &hex::encode(constants.salt()));
  print_stat("CONNECT_TIMEOUT", &format!("{}ms", constants.connect_timeout().as_millis()));
  print_stat("IDLE_TIMEOUT", &format!("{}ms", constants.idle_timeout().as_millis()));
  print_stat("SPINDOWN_TIMEOUT", &format!("{}ms", constants.spindown_timeout().as_millis()));
  print_stat("KNOWN_NODES_LIMIT", &constants.known_nodes_limit().to_string());

  Ok(())
}
