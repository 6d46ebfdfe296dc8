// === Module Header (agents-tooling) START ===
// header: Parsed by scripts/check_module_headers.sh for purpose/role presence; keep keys on single-line entries.
// purpose: Derive the distinct 4-digit and 6-digit winning-number sets from prize winner strings
// role: processing/extraction
// inputs: prize key, winner strings
// outputs: OrderedSet accumulators of distinct number strings in first-seen order
// invariants:
// - numbers4 only collects from 4th..9th prize tiers; numbers6 only from 1st/2nd/3rd/consolation
// - first standalone digit run per winner string; uniqueness by value; insertion order preserved
// - prize keys outside both tier lists contribute nothing
// tie_breakers: contracts > orchestration > correctness > performance > minimal_diffs
// === Module Header END ===

use regex::Regex;
use std::collections::HashSet;

use crate::patterns::{FOUR_DIGIT_RUN, SIX_DIGIT_RUN};

/// Prize tiers whose winners carry 4-digit endings.
pub const LOWER_TIER_KEYS: [&str; 6] = [
  "4th_prize",
  "5th_prize",
  "6th_prize",
  "7th_prize",
  "8th_prize",
  "9th_prize",
];

/// Prize tiers whose winners carry full 6-digit ticket numbers.
pub const TOP_TIER_KEYS: [&str; 4] = ["1st_prize", "2nd_prize", "3rd_prize", "consolation_prize"];

/// Insertion-order-preserving set of number strings.
///
/// Serialization order of the collected numbers is first-seen order under the
/// key-sorted prize scan; see DESIGN.md for the ordering decision.
#[derive(Debug, Default)]
pub struct OrderedSet {
  seen: HashSet<String>,
  items: Vec<String>,
}

impl OrderedSet {
  pub fn insert(&mut self, value: String) {
    if self.seen.insert(value.clone()) {
      self.items.push(value);
    }
  }

  pub fn into_vec(self) -> Vec<String> {
    self.items
  }

  #[allow(dead_code)]
  pub fn len(&self) -> usize {
    self.items.len()
  }

  #[allow(dead_code)]
  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

fn collect_first_run(re: &Regex, winner: &str, acc: &mut OrderedSet) {
  if let Some(caps) = re.captures(winner) {
    acc.insert(caps[1].to_string());
  }
}

/// Feed one prize tier's winners into the matching accumulator.
///
/// The first standalone run per winner string wins; later runs in the same
/// string are ignored, matching the published artifacts.
pub fn collect_winner_numbers(
  prize_key: &str,
  winners: &[String],
  numbers4: &mut OrderedSet,
  numbers6: &mut OrderedSet,
) {
  if LOWER_TIER_KEYS.contains(&prize_key) {
    for w in winners {
      collect_first_run(&FOUR_DIGIT_RUN, w, numbers4);
    }
  } else if TOP_TIER_KEYS.contains(&prize_key) {
    for w in winners {
      collect_first_run(&SIX_DIGIT_RUN, w, numbers6);
    }
  }
}
