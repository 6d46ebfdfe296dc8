// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Utilities for paths, directory listing, effective-now handling, atomic JSON writes, and man page rendering
// role: utilities/helpers
// inputs: Various primitives; DateTime; paths; clap CommandFactory
// outputs: Canonicalized paths, sorted file listings, written artifacts, man page text
// side_effects: write_json_pretty writes and renames files; list_json_files reads the directory
// invariants:
// - list_json_files returns `.json` names in ascending order regardless of platform enumeration order
// - write_json_pretty never leaves a partially written artifact at the target path
// errors: IO errors bubble with path context
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::CommandFactory;
use serde::Serialize;

pub fn canonicalize_lossy<P: AsRef<Path>>(p: P) -> String {
  let p = p.as_ref();
  let pb: PathBuf = match std::fs::canonicalize(p) {
    Ok(x) => x,
    Err(_) => match std::env::current_dir() {
      Ok(cwd) => cwd.join(p),
      Err(_) => PathBuf::from(p),
    },
  };
  pb.to_string_lossy().to_string()
}

/// List the `.json` file names in a directory, ascending.
///
/// Sorting here normalizes platform enumeration order, so every later stage
/// (and the dedup tie-break in particular) sees a deterministic sequence.
/// An unreadable directory is the one fatal error of a run.
pub fn list_json_files(dir: &str) -> Result<Vec<String>> {
  let entries = std::fs::read_dir(dir).with_context(|| format!("listing note directory {}", dir))?;
  let mut files: Vec<String> = Vec::new();

  for entry in entries {
    let entry = entry.with_context(|| format!("listing note directory {}", dir))?;
    let name = entry.file_name().to_string_lossy().to_string();
    if name.ends_with(".json") {
      files.push(name);
    }
  }

  files.sort();
  Ok(files)
}

/// Serialize `value` as pretty JSON and move it into place atomically.
///
/// Writes a sibling temp file first and renames over the target, so a reader
/// never observes a half-written artifact.
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
  if let Some(parent) = path.parent() {
    if !parent.as_os_str().is_empty() {
      std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
  }

  let bytes = serde_json::to_vec_pretty(value)?;
  let tmp = path.with_extension("json.tmp");
  std::fs::write(&tmp, &bytes).with_context(|| format!("writing {}", tmp.display()))?;
  std::fs::rename(&tmp, path).with_context(|| format!("renaming {} into place", tmp.display()))?;

  Ok(())
}

/// Returns the effective "now" given an optional override.
///
/// When `override_now` is `Some`, that instant is returned; otherwise
/// the current local time is used. Centralizes our handling of test
/// determinism without sprinkling `Local::now()` throughout the code.
pub fn effective_now(override_now: Option<DateTime<Local>>) -> DateTime<Local> {
  override_now.unwrap_or_else(Local::now)
}

/// Parse the hidden `--now-override` value (RFC3339 or naive local datetime).
pub fn parse_now_override(s: Option<&str>) -> Option<DateTime<Local>> {
  s.and_then(|raw| {
    chrono::DateTime::parse_from_rfc3339(raw)
      .ok()
      .map(|dt| dt.with_timezone(&Local))
      .or_else(|| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
          .ok()
          .and_then(|ndt| ndt.and_local_timezone(Local).single())
      })
  })
}

/// Render a section-1 man page for a clap `CommandFactory` implementor.
/// Returns the troff content as a UTF-8 string.
pub fn render_man_page<T: CommandFactory>() -> anyhow::Result<String> {
  let cmd = T::command();
  let man = clap_mangen::Man::new(cmd);
  let mut buf: Vec<u8> = Vec::new();

  man.render(&mut buf)?;

  Ok(String::from_utf8_lossy(&buf).to_string())
}
