//! Mount URL handling and `file:` URL to native path conversion.
//!
//! Relative resolution (`..`, `pear/`, `../../../`) follows WHATWG URL rules
//! via the `url` crate, so the results line up with what a browser-style URL
//! implementation produces for the same inputs. Native paths are rendered for
//! the target [`Os`], never for the host, which keeps the output identical no
//! matter which machine computes it.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::consts::BUNDLE_SUFFIX;
use crate::error::ConstantsError;
use crate::platform::os::Os;

/// A parsed mount URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
  url: Url,
  dir: Url,
}

impl Mount {
  /// Parse a mount URL. Only `file:` URLs are accepted.
  pub fn parse(input: &str) -> Result<Self, ConstantsError> {
    let url = Url::parse(input).map_err(|e| ConstantsError::mount(input, e.to_string()))?;
    if url.scheme() != "file" {
      return Err(ConstantsError::mount(input, format!("expected a file: URL, got {}:", url.scheme())));
    }

    // Relative resolution treats the mount as a directory.
    let mut dir = url.clone();
    if !dir.path().ends_with('/') {
      let path = format!("{}/", dir.path());
      dir.set_path(&path);
    }

    Ok(Self { url, dir })
  }

  /// Canonical href with one trailing slash removed
  pub fn href(&self) -> &str {
    let href = self.url.as_str();
    href.strip_suffix('/').unwrap_or(href)
  }

  /// True when the mount path ends in `.bundle/`
  pub fn is_bundle(&self) -> bool {
    self.dir.path().ends_with(BUNDLE_SUFFIX)
  }

  /// URL of the writable working root: the mount, or its parent for bundles
  pub fn swap_url(&self) -> Result<Url, ConstantsError> {
    if self.is_bundle() {
      join(&self.dir, "..")
    } else {
      Ok(self.dir.clone())
    }
  }
}

/// Resolve `rel` against `base` the way `new URL(rel, base)` does
pub(crate) fn join(base: &Url, rel: &str) -> Result<Url, ConstantsError> {
  base
    .join(rel)
    .map_err(|e| ConstantsError::mount(base.as_str(), format!("cannot resolve {rel:?}: {e}")))
}

/// Convert a `file:` URL into a native path string for `os`
///
/// One trailing separator is stripped; a path that becomes empty is `/`.
pub fn to_native_path(url: &Url, os: Os) -> Result<String, ConstantsError> {
  if url.scheme() != "file" {
    return Err(ConstantsError::mount(url.as_str(), "expected a file: URL"));
  }

  let host = url.host_str().unwrap_or("");
  let path = match os {
    Os::Windows => windows_path(url, host)?,
    Os::Darwin | Os::Linux => posix_path(url, host)?,
  };

  Ok(strip_trailing_separator(path))
}

fn posix_path(url: &Url, host: &str) -> Result<String, ConstantsError> {
  if !host.is_empty() && host != "localhost" {
    return Err(ConstantsError::mount(url.as_str(), "file URL host must be \"localhost\" or empty on this platform"));
  }
  let raw = url.path();
  if contains_encoded(raw, &["%2f"]) {
    return Err(ConstantsError::mount(url.as_str(), "file URL path must not include encoded / characters"));
  }
  decode(url, raw)
}

fn windows_path(url: &Url, host: &str) -> Result<String, ConstantsError> {
  let raw = url.path();
  if contains_encoded(raw, &["%2f", "%5c"]) {
    return Err(ConstantsError::mount(url.as_str(), "file URL path must not include encoded \\ or / characters"));
  }
  let sep = Os::Windows.separator();
  let path = decode(url, &raw.replace('/', &sep.to_string()))?;

  if !host.is_empty() {
    return Ok(format!("{sep}{sep}{host}{path}"));
  }

  let bytes = path.as_bytes();
  let has_drive = path.starts_with(sep) && bytes.len() >= 3 && bytes[1].is_ascii_alphabetic() && bytes[2] == b':';
  if !has_drive {
    return Err(ConstantsError::mount(url.as_str(), "file URL path must be absolute"));
  }
  Ok(path[1..].to_string())
}

fn contains_encoded(raw: &str, needles: &[&str]) -> bool {
  let lower = raw.to_ascii_lowercase();
  needles.iter().any(|needle| lower.contains(needle))
}

fn decode(url: &Url, raw: &str) -> Result<String, ConstantsError> {
  percent_decode_str(raw)
    .decode_utf8()
    .map(Cow::into_owned)
    .map_err(|_| ConstantsError::mount(url.as_str(), "file URL path is not valid UTF-8"))
}

fn strip_trailing_separator(mut path: String) -> String {
  if path.ends_with(['/', '\\']) {
    path.pop();
  }
  if path.is_empty() {
    path.push('/');
  }
  path
}
