// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Define the JSON model (history entries, manifest entries, prize tiers) shared by both pipelines
// role: model/types
// outputs: Serializable structs with stable field names matching the deployed artifact shapes
// invariants: Field names and ordering match the published history.json / result_manifest.json; additive fields only
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use serde::{Deserialize, Serialize};

/// One prize tier of a draw, as published in a history entry.
///
/// `label`, `amount`, and `winners` default to empty/zero when the source
/// record omits them or carries a non-array winners field.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PrizeEntry {
  pub prize_key: String,
  pub label: String,
  pub amount: serde_json::Number,
  pub winners: Vec<String>,
}

/// Enriched per-draw record used for display and analytics.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryEntry {
  pub date: String,
  pub lottery: String,
  pub draw: String,
  pub filename: String,
  pub github_url: String,
  pub prizes: Vec<PrizeEntry>,
  pub numbers4: Vec<String>,
  pub numbers6: Vec<String>,
  #[serde(rename = "downloadLink")]
  pub download_link: String,
}

/// Lightweight index record for one available result file.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ManifestEntry {
  pub code: String,
  pub draw_number: String,
  pub date: String,
  pub filename: String,
}
