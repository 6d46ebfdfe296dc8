// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Turn one loosely-typed draw record into an enriched history entry
// role: processing/assembly
// inputs: parsed serde_json::Value of a per-draw file plus its filename
// outputs: HistoryEntry with resolved lottery code, padded draw, prize list, number sets, raw-GitHub URL
// side_effects: None; pure computation
// invariants:
// - lottery code resolution order: parenthesized code in lottery_name, filename prefix, empty
// - draw is zero-padded to at least two digits; absent draw stays empty
// - prize list preserves every prize key with label/amount/winners defaults
// errors: None; missing or mistyped fields degrade to defaults
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use crate::ext::serde_json::{JsonFetch, string_like};
use crate::model::{HistoryEntry, PrizeEntry};
use crate::numbers::{self, OrderedSet};
use crate::patterns::{CODE_FROM_FILENAME, CODE_IN_NAME};

/// Upstream repository the per-draw files are published to.
pub const GITHUB_ORG: &str = "santhkhd";
pub const GITHUB_REPO: &str = "kerala_loto";

/// Resolve the 2-3 letter lottery code.
///
/// The parenthesized code in the display name wins; the filename prefix is
/// the fallback; otherwise the code stays empty.
pub fn resolve_lottery_code(lottery_name: Option<&str>, filename: &str) -> String {
  if let Some(name) = lottery_name {
    if let Some(caps) = CODE_IN_NAME.captures(name) {
      return caps[1].to_string();
    }
  }

  match CODE_FROM_FILENAME.captures(filename) {
    Some(caps) => caps[1].to_string(),
    None => String::new(),
  }
}

/// Zero-pad a draw number to at least two digits; absent draws stay empty.
pub fn normalize_draw(draw_number: Option<String>) -> String {
  match draw_number {
    Some(n) if !n.is_empty() => format!("{:0>2}", n),
    _ => String::new(),
  }
}

/// Raw-GitHub download URL for a result file in the published `note/` tree.
pub fn github_raw_url(filename: &str) -> String {
  format!(
    "https://raw.githubusercontent.com/{}/{}/main/note/{}",
    GITHUB_ORG,
    GITHUB_REPO,
    urlencoding::encode(filename)
  )
}

fn winner_strings(prize: &serde_json::Value) -> Vec<String> {
  match prize.get("winners").and_then(|v| v.as_array()) {
    Some(items) => items.iter().filter_map(string_like).collect(),
    None => Vec::new(),
  }
}

/// Assemble the enriched entry for one draw record.
///
/// Completeness (non-empty date, non-empty prizes) is the caller's gate; this
/// function always produces an entry.
pub fn assemble_entry(data: &serde_json::Value, filename: &str) -> HistoryEntry {
  let lottery_name = data.fetch("lottery_name").to::<String>();
  let lottery = resolve_lottery_code(lottery_name.as_deref(), filename);
  let draw = normalize_draw(data.fetch("draw_number").to_string_like());
  let date = data.fetch("draw_date").to_or_default::<String>();

  let mut prizes: Vec<PrizeEntry> = Vec::new();
  let mut numbers4 = OrderedSet::default();
  let mut numbers6 = OrderedSet::default();

  if let Some(map) = data.get("prizes").and_then(|v| v.as_object()) {
    for (prize_key, prize) in map {
      let winners = winner_strings(prize);
      numbers::collect_winner_numbers(prize_key, &winners, &mut numbers4, &mut numbers6);
      prizes.push(PrizeEntry {
        prize_key: prize_key.clone(),
        label: prize.fetch("label").to_or_default(),
        amount: prize
          .fetch("amount")
          .to::<serde_json::Number>()
          .unwrap_or_else(|| 0.into()),
        winners,
      });
    }
  }

  HistoryEntry {
    date,
    lottery,
    draw,
    filename: filename.to_string(),
    github_url: github_raw_url(filename),
    prizes,
    numbers4: numbers4.into_vec(),
    numbers6: numbers6.into_vec(),
    download_link: data.fetch("downloadLink").to_or_default(),
  }
}
