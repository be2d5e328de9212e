use anyhow::{Context, Result, bail};
use pear_constants::Constants;

use crate::output::plain;

/// Print one constant, looked up by its upper-case name.
pub fn cmd_get(constants: &Constants, name: &str) -> Result<()> {
  let record = serde_json::to_value(constants).context("Failed to serialize constants")?;
  let key = name.to_ascii_uppercase();

  match record.get(&key) {
    Some(value) if value.is_object() => println!("{}", serde_json::to_string(value)?),
    Some(value) => println!("{}", plain(value)),
    None => {
      let known: Vec<&str> = record
        .as_object()
        .map(|fields| fields.keys().map(String::as_str).collect())
        .unwrap_or_default();
      bail!("Unknown constant '{}'. Known constants: {}", name, known.join(", "));
    }
  }

  Ok(())
}
