use crate::common;

fn read_history(root: &std::path::Path) -> Vec<serde_json::Value> {
  let text = std::fs::read_to_string(root.join("history.json")).unwrap();
  serde_json::from_str(&text).unwrap()
}

#[test]
fn entries_carry_code_padding_numbers_and_url() {
  let td = tempfile::TempDir::new().unwrap();
  let note = common::init_note_dir(td.path());
  common::write_note(&note, "SS-05-2025-06-01.json", &common::draw_record("STHREE SAKTHI (SS)", 5, "2025-06-01"));

  let out = common::run_index(td.path(), &["--history-only"]);
  assert!(out.status.success());

  let entries = read_history(td.path());
  assert_eq!(entries.len(), 1);
  let e = &entries[0];
  assert_eq!(e["lottery"], "SS");
  assert_eq!(e["draw"], "05");
  assert_eq!(e["date"], "2025-06-01");
  assert_eq!(e["filename"], "SS-05-2025-06-01.json");
  assert_eq!(
    e["github_url"],
    "https://raw.githubusercontent.com/santhkhd/kerala_loto/main/note/SS-05-2025-06-01.json"
  );
  assert_eq!(e["downloadLink"], "https://example.com/results.pdf");

  // top tiers feed numbers6; lower tiers feed numbers4; both deduplicated
  let numbers6: Vec<&str> = e["numbers6"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
  assert_eq!(numbers6, vec!["987654"]);
  let numbers4: Vec<&str> = e["numbers4"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
  assert_eq!(numbers4, vec!["1234", "5678", "4321"]);
}

#[test]
fn json_code_beats_filename_prefix() {
  let td = tempfile::TempDir::new().unwrap();
  let note = common::init_note_dir(td.path());
  common::write_note(&note, "XX-01-2025-01-01.json", &common::draw_record("DHANALEKSHMI (DL)", 1, "2025-01-01"));

  assert!(common::run_index(td.path(), &["--history-only"]).status.success());
  let entries = read_history(td.path());
  assert_eq!(entries[0]["lottery"], "DL");
}

#[test]
fn filename_prefix_is_used_when_name_has_no_code() {
  let td = tempfile::TempDir::new().unwrap();
  let note = common::init_note_dir(td.path());
  common::write_note(&note, "SK-17-2025-08-29.json", &common::draw_record("SUVARNA KERALAM", 17, "2025-08-29"));

  assert!(common::run_index(td.path(), &["--history-only"]).status.success());
  let entries = read_history(td.path());
  assert_eq!(entries[0]["lottery"], "SK");
}

#[test]
fn history_sorts_newest_first_with_unknown_last_and_dedups_dates() {
  let td = tempfile::TempDir::new().unwrap();
  let note = common::init_note_dir(td.path());
  common::write_note(&note, "KR-01-2025-01-01.json", &common::draw_record("KARUNYA (KR)", 1, "2025-01-01"));
  common::write_note(&note, "KR-02-2025-06-01.json", &common::draw_record("KARUNYA (KR)", 2, "2025-06-01"));
  common::write_note(&note, "KR-03-2025-06-01.json", &common::draw_record("KARUNYA (KR)", 3, "2025-06-01"));
  common::write_note(&note, "KR-04-unknown.json", &common::draw_record("KARUNYA (KR)", 4, "Unknown-Date"));

  let out = common::run_index(td.path(), &["--history-only"]);
  assert!(out.status.success());
  assert!(String::from_utf8_lossy(&out.stdout).contains("with 3 draws."));

  let entries = read_history(td.path());
  let dates: Vec<&str> = entries.iter().map(|e| e["date"].as_str().unwrap()).collect();
  assert_eq!(dates, vec!["2025-06-01", "2025-01-01", "Unknown-Date"]);

  // the first-encountered file for the shared date survives
  assert_eq!(entries[0]["filename"], "KR-02-2025-06-01.json");
}

#[test]
fn records_without_date_or_prizes_are_filtered() {
  let td = tempfile::TempDir::new().unwrap();
  let note = common::init_note_dir(td.path());
  common::write_note(&note, "KR-01-2025-01-01.json", &common::draw_record("KARUNYA (KR)", 1, "2025-01-01"));
  common::write_note(&note, "no-date.json", r#"{"prizes": {"1st_prize": {"winners": ["AA 111111"]}}}"#);
  common::write_note(&note, "no-prizes.json", r#"{"draw_date": "2025-02-02", "prizes": {}}"#);

  let out = common::run_index(td.path(), &["--history-only"]);
  assert!(out.status.success());
  assert!(String::from_utf8_lossy(&out.stdout).contains("with 1 draws."));
}
