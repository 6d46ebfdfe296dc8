// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Build the chronologically ordered, deduplicated history index from the note directory
// role: processing/pipeline
// inputs: EffectiveConfig (note_dir, history_out)
// outputs: history_out JSON array of HistoryEntry; stdout count summary
// side_effects: Reads every .json file under note_dir; writes the history artifact
// invariants:
// - entries lacking a date or prizes are filtered, never errors
// - one entry survives per date; Unknown-Date entries are exempt from dedup
// - a single file's read/parse failure skips that file only
// errors: Only an unreadable note directory aborts the run
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::EffectiveConfig;
use crate::draw;
use crate::model::HistoryEntry;
use crate::ordering;
use crate::util;

/// Read one draw file into an enriched entry; malformed content is a skip.
fn read_entry(note_dir: &str, filename: &str) -> Option<HistoryEntry> {
  let path = Path::new(note_dir).join(filename);

  let content = match std::fs::read_to_string(&path) {
    Ok(c) => c,
    Err(err) => {
      eprintln!("skipping {}: {}", filename, err);
      return None;
    }
  };

  let data: serde_json::Value = match serde_json::from_str(&content) {
    Ok(v) => v,
    Err(err) => {
      eprintln!("skipping {}: {}", filename, err);
      return None;
    }
  };

  Some(draw::assemble_entry(&data, filename))
}

/// Run the history pipeline: enumerate, assemble, sort, dedup, write.
pub fn generate(cfg: &EffectiveConfig) -> Result<usize> {
  let files = util::list_json_files(&cfg.note_dir)?;

  let mut history: Vec<HistoryEntry> = Vec::new();
  for filename in &files {
    let Some(entry) = read_entry(&cfg.note_dir, filename) else {
      continue;
    };
    if entry.date.is_empty() || entry.prizes.is_empty() {
      // incomplete record: filtered, not an error
      continue;
    }
    history.push(entry);
  }

  ordering::sort_newest_first(&mut history, |e| &e.date, |e| &e.filename);
  let history = ordering::dedup_first_wins(history, |e| {
    if e.date == ordering::UNKNOWN_DATE {
      None
    } else {
      Some(e.date.clone())
    }
  });

  util::write_json_pretty(&cfg.history_out, &history)
    .with_context(|| format!("writing history index {}", cfg.history_out.display()))?;
  println!("Generated {} with {} draws.", cfg.history_out.display(), history.len());

  Ok(history.len())
}
