use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("number-sorter").unwrap();
    cmd.env("SORTER_COLOR", "false")
        .env("SORTER_PROGRESS_THRESHOLD", "0")
        .env_remove("SORTER_REPORT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn sorts_typed_list() {
    cmd()
        .write_stdin("1\n5 3 8 1\n")
        .assert()
        .success()
        .stdout(contains("Insert: [1, 3, 5, 8]"))
        .stdout(contains(" seconds"));
}

#[test]
fn reports_all_validation_reasons() {
    cmd()
        .write_stdin("2\nabcdefghijk\n")
        .assert()
        .success()
        .stdout(contains(
            "Error: Invalid characters detected. Fewer than 2 integers detected. \
             Integers exceeding 999999999 detected.",
        ))
        .stdout(contains("Bubble:").not());
}

#[test]
fn json_reports_on_request() {
    cmd()
        .env("SORTER_REPORT_FORMAT", "json")
        .write_stdin("3\n2 1\n")
        .assert()
        .success()
        .stdout(contains(r#"{"algorithm":"Insert","sorted":[1,2]"#))
        .stdout(contains(r#"{"algorithm":"Bubble","sorted":[1,2]"#));
}

#[test]
fn no_color_env_keeps_output_plain() {
    cmd()
        .env("SORTER_COLOR", "true")
        .env("NO_COLOR", "1")
        .write_stdin("1\n2 1\n")
        .assert()
        .success()
        .stdout(contains("Insert: [1, 2]\n"))
        .stdout(contains("\u{1b}[").not());
}

#[test]
fn piped_stdout_is_plain_by_default() {
    Command::cargo_bin("number-sorter")
        .unwrap()
        .env_remove("SORTER_COLOR")
        .env_remove("NO_COLOR")
        .env_remove("SORTER_REPORT_FORMAT")
        .env("SORTER_PROGRESS_THRESHOLD", "0")
        .write_stdin("1\n7\n5 3 8 1\n")
        .assert()
        .success()
        .stdout(contains("\nError: Fewer than 2 integers detected.\n"))
        .stdout(contains("\nInsert: [1, 3, 5, 8]\n"))
        .stdout(contains("\u{1b}[").not());
}
