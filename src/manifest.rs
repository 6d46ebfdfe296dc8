// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build the manifest of available result files, filtered to complete, non-future draws
// role: processing/pipeline
// inputs: EffectiveConfig (note_dir, manifest_out), optional now override
// outputs: manifest_out JSON array of ManifestEntry; stdout count summary
// side_effects: Reads note_dir listing and peeks at each candidate file; writes the manifest artifact
// invariants:
// - only files matching CODE-DRAWNUM-YYYY-MM-DD.json are eligible; others are silently absent
// - future-dated records (day granularity vs effective now) are excluded
// - records whose prizes field is missing or empty are excluded; unreadable candidates are logged rejections
// - one entry survives per (date, code) pair
// errors: Only an unreadable note directory aborts the run
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use std::path::Path;

use crate::cli::EffectiveConfig;
use crate::model::ManifestEntry;
use crate::ordering;
use crate::patterns::RESULT_FILENAME;
use crate::util;

/// Parse `CODE-DRAWNUM-YYYY-MM-DD.json` into a manifest entry.
///
/// Files outside the convention are not an error; they are simply absent
/// from the manifest. The draw number stays unpadded here.
pub fn parse_result_filename(filename: &str) -> Option<ManifestEntry> {
  let caps = RESULT_FILENAME.captures(filename)?;
  Some(ManifestEntry {
    code: caps[1].to_string(),
    draw_number: caps[2].to_string(),
    date: caps[3].to_string(),
    filename: filename.to_string(),
  })
}

/// A date past "today" marks a result that cannot exist yet.
/// Unparseable dates are not future; they sort last instead.
fn is_future(date: &str, today: NaiveDate) -> bool {
  match ordering::parse_date(date) {
    Some(d) => d > today,
    None => false,
  }
}

/// Completeness check: the record must carry at least one prize.
///
/// Accepts the prizes field as a non-empty object or non-empty array.
/// Read or parse failures count as rejection, never as a fatal error.
fn has_prizes(path: &Path, filename: &str) -> bool {
  let content = match std::fs::read_to_string(path) {
    Ok(c) => c,
    Err(err) => {
      eprintln!("rejecting {}: {}", filename, err);
      return false;
    }
  };

  let data: serde_json::Value = match serde_json::from_str(&content) {
    Ok(v) => v,
    Err(err) => {
      eprintln!("rejecting {}: {}", filename, err);
      return false;
    }
  };

  match data.get("prizes") {
    Some(serde_json::Value::Object(map)) => !map.is_empty(),
    Some(serde_json::Value::Array(items)) => !items.is_empty(),
    _ => false,
  }
}

/// Run the manifest pipeline: enumerate, parse filenames, filter, sort, dedup, write.
pub fn generate(cfg: &EffectiveConfig, now_opt: Option<DateTime<Local>>) -> Result<usize> {
  let today = util::effective_now(now_opt).date_naive();
  let files = util::list_json_files(&cfg.note_dir)?;

  let mut manifest: Vec<ManifestEntry> = Vec::new();
  for filename in &files {
    let Some(entry) = parse_result_filename(filename) else {
      continue;
    };
    if is_future(&entry.date, today) {
      continue;
    }
    if !has_prizes(&Path::new(&cfg.note_dir).join(filename), filename) {
      continue;
    }
    manifest.push(entry);
  }

  ordering::sort_newest_first(&mut manifest, |e| &e.date, |e| &e.filename);
  let manifest = ordering::dedup_first_wins(manifest, |e| Some((e.date.clone(), e.code.clone())));

  util::write_json_pretty(&cfg.manifest_out, &manifest)
    .with_context(|| format!("writing manifest {}", cfg.manifest_out.display()))?;
  println!(
    "Manifest written to {} with {} results.",
    cfg.manifest_out.display(),
    manifest.len()
  );

  Ok(manifest.len())
}
