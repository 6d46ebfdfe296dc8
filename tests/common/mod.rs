use std::path::{Path, PathBuf};

/// Create a `note/` directory under `root` for per-draw fixture files.
#[allow(dead_code)]
pub fn init_note_dir(root: &Path) -> PathBuf {
  let dir = root.join("note");
  std::fs::create_dir_all(&dir).unwrap();
  dir
}

#[allow(dead_code)]
pub fn write_note(note_dir: &Path, filename: &str, body: &str) {
  std::fs::write(note_dir.join(filename), body).unwrap();
}

/// A realistic complete draw record in the upstream shape.
#[allow(dead_code)]
pub fn draw_record(lottery_name: &str, draw_number: u32, date: &str) -> String {
  serde_json::json!({
    "lottery_name": lottery_name,
    "draw_number": draw_number,
    "draw_date": date,
    "prizes": {
      "1st_prize": {
        "label": "1st Prize Rs: 10000000/-",
        "amount": 10000000,
        "winners": ["KN 987654 (KOLLAM)"]
      },
      "consolation_prize": {
        "label": "Consolation Prize Rs: 5000/-",
        "amount": 5000,
        "winners": ["KO 987654", "KP 987654"]
      },
      "4th_prize": {
        "label": "4th Prize Rs: 5000/-",
        "amount": 5000,
        "winners": ["1234", "5678"]
      },
      "8th_prize": {
        "label": "8th Prize Rs: 100/-",
        "amount": 100,
        "winners": ["4321"]
      }
    },
    "downloadLink": "https://example.com/results.pdf"
  })
  .to_string()
}

/// Invoke the binary against `root`, with artifacts placed next to `note/`.
#[allow(dead_code)]
pub fn run_index(root: &Path, extra_args: &[&str]) -> std::process::Output {
  let mut cmd = assert_cmd::Command::cargo_bin("lottery-result-index").unwrap();
  cmd.args([
    "--note-dir",
    root.join("note").to_str().unwrap(),
    "--history-out",
    root.join("history.json").to_str().unwrap(),
    "--manifest-out",
    root.join("result_manifest.json").to_str().unwrap(),
  ]);
  cmd.args(extra_args);
  cmd.output().unwrap()
}
