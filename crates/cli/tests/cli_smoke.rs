//! CLI smoke tests for pear-constants.
//!
//! These tests run the binary with explicit inputs so the output does not
//! depend on the machine running them.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const ENV_VARS: &[&str] = &[
  "PEAR_MOUNT",
  "PEAR_CHECKOUT_FORK",
  "PEAR_CHECKOUT_LENGTH",
  "PEAR_CHECKOUT_KEY",
  "PEAR_PLATFORM",
  "PEAR_ARCH",
];

/// Get a Command for the binary with a clean `PEAR_*` environment.
fn pear_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("pear-constants");
  for var in ENV_VARS {
    cmd.env_remove(var);
  }
  cmd
}

/// Command preloaded with a linux local-dev bundle mount.
fn linux_bundle() -> Command {
  let mut cmd = pear_cmd();
  cmd.args(["--mount", "file:///opt/app/.bundle/", "--platform", "linux", "--arch", "x64"]);
  cmd
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  pear_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["show", "get"] {
    pear_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// show
// =============================================================================

#[test]
fn show_prints_derived_paths() {
  linux_bundle()
    .arg("show")
    .assert()
    .success()
    .stdout(predicate::str::contains("/opt/app/pear/corestores/platform/db/LOCK"))
    .stdout(predicate::str::contains("/opt/app/by-arch/linux-x64/bin/pear-runtime"))
    .stdout(predicate::str::contains("/opt/app/pear/pear.sock"));
}

#[test]
fn show_json_is_parseable() {
  let output = linux_bundle().args(["show", "--format", "json"]).output().unwrap();
  assert!(output.status.success());

  let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(value["SWAP"], "/opt/app");
  assert_eq!(value["PLATFORM_DIR"], "/opt/app/pear");
  assert_eq!(value["LOCALDEV"], true);
  assert_eq!(value["KNOWN_NODES_LIMIT"], 100);
}

#[test]
fn env_mount_is_used_when_flag_missing() {
  pear_cmd()
    .env("PEAR_MOUNT", "file:///srv/pear/by-dkey/abc/3/")
    .env("PEAR_CHECKOUT_LENGTH", "3")
    .args(["--platform", "darwin", "--arch", "arm64", "get", "PLATFORM_DIR"])
    .assert()
    .success()
    .stdout("/srv/pear\n");
}

// =============================================================================
// get
// =============================================================================

#[test]
fn get_prints_single_value() {
  linux_bundle()
    .args(["get", "SWAP"])
    .assert()
    .success()
    .stdout("/opt/app\n");
}

#[test]
fn get_windows_socket_is_named_pipe() {
  pear_cmd()
    .args(["--mount", "file:///C:/pear/", "--platform", "win32", "--arch", "x64"])
    .args(["get", "SOCKET_PATH"])
    .assert()
    .success()
    .stdout(predicate::str::starts_with(r"\\.\pipe\pear-"));
}

#[test]
fn get_unknown_constant_fails() {
  linux_bundle()
    .args(["get", "NOPE"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Unknown constant"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn missing_mount_fails() {
  pear_cmd()
    .arg("show")
    .assert()
    .failure()
    .stderr(predicate::str::contains("PEAR_MOUNT"));
}

#[test]
fn invalid_mount_fails() {
  pear_cmd()
    .args(["--mount", "https://example.com/app/", "show"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("invalid mount URL"));
}

#[test]
fn unsupported_platform_fails() {
  pear_cmd()
    .args(["--mount", "file:///opt/app/", "--platform", "plan9", "show"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("unsupported platform"));
}
