use anyhow::{Result, bail};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util;

#[derive(Parser, Debug)]
#[command(
    name = "lottery-result-index",
    version,
    about = "Index per-draw lottery result files into history and manifest JSON",
    long_about = None
)]
pub struct Cli {
  /// Directory holding per-draw result files (default: note)
  #[arg(long, default_value = "note")]
  pub note_dir: PathBuf,

  /// Where to write the history index
  #[arg(long, default_value = "history.json")]
  pub history_out: PathBuf,

  /// Where to write the result manifest
  #[arg(long, default_value = "result_manifest.json")]
  pub manifest_out: PathBuf,

  /// Only rebuild the history index
  #[arg(long)]
  pub history_only: bool,

  /// Only rebuild the result manifest
  #[arg(long)]
  pub manifest_only: bool,

  /// Emit a troff man page to stdout (internal; for packaging)
  #[arg(long, hide = true)]
  pub gen_man: bool,

  /// Override the "now" instant for future-date filtering (hidden; tests only)
  #[arg(long = "now-override", hide = true)]
  pub now_override: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EffectiveConfig {
  pub note_dir: String, // absolute path for stability
  pub history_out: PathBuf,
  pub manifest_out: PathBuf,
  pub run_history: bool,
  pub run_manifest: bool,
  pub now_override: Option<String>,
}

pub fn normalize(cli: Cli) -> Result<EffectiveConfig> {
  let (run_history, run_manifest) = match (cli.history_only, cli.manifest_only) {
    (true, true) => bail!("Ambiguous selection: choose only one of --history-only | --manifest-only"),
    (true, false) => (true, false),
    (false, true) => (false, true),
    (false, false) => (true, true),
  };

  let note_dir = util::canonicalize_lossy(&cli.note_dir);

  Ok(EffectiveConfig {
    note_dir,
    history_out: cli.history_out,
    manifest_out: cli.manifest_out,
    run_history,
    run_manifest,
    now_override: cli.now_override.clone(),
  })
}
