// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Shared sort and dedup policy applied to both the history and manifest pipelines
// role: processing/policy
// inputs: entry vectors plus accessors for the date / filename / dedup key
// outputs: date-descending stable order with unknown dates last; first-wins dedup
// invariants:
// - valid dates sort newest first; unknown/unparseable dates sort after all valid ones
// - equal dates fall back to ascending filename so output is platform-independent
// - dedup keeps the first entry per key in the already-sorted sequence; keyless entries are exempt
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

/// Sentinel for a draw whose date could not be determined upstream.
pub const UNKNOWN_DATE: &str = "Unknown-Date";

/// Parse an ISO `YYYY-MM-DD` date; `None` marks unknown or unparseable.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Sort entries newest first, unknown dates last, ties by ascending filename.
pub fn sort_newest_first<T>(entries: &mut [T], date_of: impl Fn(&T) -> &str, file_of: impl Fn(&T) -> &str) {
  entries.sort_by(|a, b| {
    match (parse_date(date_of(a)), parse_date(date_of(b))) {
      (Some(da), Some(db)) => db.cmp(&da).then_with(|| file_of(a).cmp(file_of(b))),
      (Some(_), None) => Ordering::Less,
      (None, Some(_)) => Ordering::Greater,
      (None, None) => Ordering::Equal,
    }
  });
}

/// Keep the first entry per key in the already-sorted sequence.
///
/// Entries whose key is `None` are exempt from dedup and always kept.
pub fn dedup_first_wins<T, K>(entries: Vec<T>, key_of: impl Fn(&T) -> Option<K>) -> Vec<T>
where
  K: Eq + Hash,
{
  let mut seen: HashSet<K> = HashSet::new();
  let mut kept: Vec<T> = Vec::new();

  for entry in entries {
    match key_of(&entry) {
      Some(key) => {
        if seen.insert(key) {
          kept.push(entry);
        }
      }
      None => kept.push(entry),
    }
  }

  kept
}
