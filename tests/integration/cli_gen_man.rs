use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_generates_man_page() {
  let mut cmd = Command::cargo_bin("lottery-result-index").unwrap();
  cmd
    .arg("--gen-man")
    .assert()
    .success()
    .stdout(predicate::str::contains(".TH"))
    .stdout(predicate::str::contains("lottery-result-index"));
}
