// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Centralize the filename/code/digit-run patterns shared by both pipelines
// role: model/constants
// outputs: Lazily compiled Regex statics
// invariants: Single source of truth; pipelines never re-declare these patterns
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use once_cell::sync::Lazy;
use regex::Regex;

/// Strict result-file naming convention: `CODE-DRAWNUM-YYYY-MM-DD.json`.
pub static RESULT_FILENAME: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([A-Z]{2,3})-(\d+)-(\d{4}-\d{2}-\d{2})\.json$").unwrap());

/// Parenthesized lottery code inside a display name, e.g. "DHANALEKSHMI (DL)".
pub static CODE_IN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([A-Z]{2,3})\)").unwrap());

/// Leading code prefix of a result filename, e.g. "SK-17-2025-08-29.json".
pub static CODE_FROM_FILENAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]{2,3})-").unwrap());

/// Standalone 4-digit run inside a winner string.
pub static FOUR_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").unwrap());

/// Standalone 6-digit run inside a winner string.
pub static SIX_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{6})\b").unwrap());
