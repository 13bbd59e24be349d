//! CLI-level tests for `membar`. These run the real binary; the total-memory
//! path reads the live `/proc/meminfo`, so assertions stick to shape rather
//! than exact numbers.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

fn membar_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_membar"))
}

#[test]
fn test_zero_length() {
    membar_command()
        .arg("-l")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_non_numeric_length() {
    membar_command()
        .arg("-l")
        .arg("twenty")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid digit"));
}

#[test]
fn test_negative_length() {
    membar_command()
        .arg("-l")
        .arg("-5")
        .assert()
        .failure();
}

#[cfg(target_os = "linux")]
#[test]
fn test_total_memory_row_shape() {
    membar_command()
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Memory\s+\[[# ]{20} \| \d+%\] \d+ kB/\d+ kB\n$").unwrap());
}

#[cfg(target_os = "linux")]
#[test]
fn test_length_sets_bar_width() {
    membar_command()
        .arg("-l")
        .arg("10")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\[[# ]{10} \|").unwrap());
}

#[cfg(target_os = "linux")]
#[test]
fn test_human_readable_units() {
    membar_command()
        .arg("-H")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\d+\.\d{2} [KMGTP]iB/").unwrap());
}

#[test]
fn test_unknown_program_reports_no_pids() {
    // Whether the lookup utility is absent or just finds nothing, the
    // outcome is the same message and a clean exit.
    membar_command()
        .arg("no-such-program-should-exist-here")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No PIDs found for program 'no-such-program-should-exist-here'",
        ));
}
