//! Tests for platforms without Metal, where no GPUs are ever reported.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::metalgpu_command;

#[test]
fn test_empty_listing() {
    metalgpu_command(&[])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_no_default_device() {
    metalgpu_command(&["--default"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No default GPU was found on this system."));
}

#[test]
fn test_index_out_of_range() {
    metalgpu_command(&["-i", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "'0' is not a valid index, the number of GPUs found was '0'.",
        ));
}

#[test]
fn test_default_checked_before_index() {
    metalgpu_command(&["-d", "-i", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No default GPU was found"));
}
