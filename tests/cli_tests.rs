//! End-to-end tests for the `mum-finder` binary.
//!
//! These drive the compiled binary against real files on disk: flag
//! validation, the legacy option spellings, and the ordering guarantee for
//! multi-file runs.

use std::io::Write;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mum_finder() -> Command {
    Command::cargo_bin("mum-finder").unwrap()
}

fn write_fasta(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_echoes_records_in_submission_order() {
    let dir = TempDir::new().unwrap();
    let f1 = write_fasta(dir.path(), "f1.fa", ">A\nACGTACGT\nACGT\n>B\nTTTTTTTT\n");
    let f2 = write_fasta(dir.path(), "f2.fa", ">C\nGGGGGGGG\n");

    mum_finder()
        .arg(&f1)
        .arg(&f2)
        .assert()
        .success()
        .stdout("ACGTACGTACGT\n\nTTTTTTTT\n\nGGGGGGGG\n\n");
}

#[test]
fn test_file_order_beats_size_order() {
    // The first file is much larger than the second; its records must still
    // come first.
    let dir = TempDir::new().unwrap();
    let big: String = format!(">big\n{}\n", "ACGT".repeat(10_000));
    let f1 = write_fasta(dir.path(), "f1.fa", &big);
    let f2 = write_fasta(dir.path(), "f2.fa", ">small\nTT\n");

    let expected = format!("{}\n\nTT\n\n", "ACGT".repeat(10_000));
    mum_finder()
        .arg(&f1)
        .arg(&f2)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_zero_files_is_a_configuration_error() {
    mum_finder()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_min_length_rejects_zero() {
    let dir = TempDir::new().unwrap();
    let f1 = write_fasta(dir.path(), "f1.fa", ">A\nACGT\n");

    mum_finder()
        .args(["-l", "0"])
        .arg(&f1)
        .assert()
        .failure()
        .stderr(predicate::str::contains("-l"));
}

#[test]
fn test_min_length_rejects_non_numeric() {
    let dir = TempDir::new().unwrap();
    let f1 = write_fasta(dir.path(), "f1.fa", ">A\nACGT\n");

    mum_finder().args(["-l", "abc"]).arg(&f1).assert().failure();
}

#[test]
fn test_min_length_accepts_value() {
    let dir = TempDir::new().unwrap();
    let f1 = write_fasta(dir.path(), "f1.fa", ">A\nACGT\n");

    mum_finder()
        .args(["-l", "15"])
        .arg(&f1)
        .assert()
        .success();
}

#[test]
fn test_legacy_help_spelling_prints_usage() {
    mum_finder()
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_legacy_mode_spellings_are_accepted() {
    let dir = TempDir::new().unwrap();
    let f1 = write_fasta(dir.path(), "f1.fa", ">A\nACGT\n");

    for flag in ["-mum", "-mumreference", "-maxmatch"] {
        mum_finder().arg(flag).arg(&f1).assert().success();
    }
}

#[test]
fn test_strict_modes_rejects_combined_modes() {
    let dir = TempDir::new().unwrap();
    let f1 = write_fasta(dir.path(), "f1.fa", ">A\nACGT\n");

    mum_finder()
        .args(["--strict-modes", "-mum", "-maxmatch"])
        .arg(&f1)
        .assert()
        .failure()
        .stderr(predicate::str::contains("mutually exclusive"));

    // Combinations are allowed without the switch
    mum_finder()
        .args(["-mum", "-maxmatch"])
        .arg(&f1)
        .assert()
        .success();
}

#[test]
fn test_missing_file_fails_with_its_name() {
    let dir = TempDir::new().unwrap();
    let f1 = write_fasta(dir.path(), "f1.fa", ">A\nACGT\n");
    let missing = dir.path().join("no-such-file.fa");

    mum_finder()
        .arg(&f1)
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.fa"));
}

#[test]
fn test_empty_file_fails_validation() {
    let dir = TempDir::new().unwrap();
    let f1 = write_fasta(dir.path(), "empty.fa", "");

    mum_finder()
        .arg(&f1)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty.fa"));
}

#[test]
fn test_gzipped_input_matches_plain_input() {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = TempDir::new().unwrap();
    let plain = write_fasta(dir.path(), "plain.fa", ">A\nACGTACGT\n");

    let gz_path = dir.path().join("same.fa.gz");
    let file = std::fs::File::create(&gz_path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(b">A\nACGTACGT\n").unwrap();
    encoder.finish().unwrap();

    let plain_output = mum_finder().arg(&plain).assert().success();
    let gz_output = mum_finder().arg(&gz_path).assert().success();

    assert_eq!(
        plain_output.get_output().stdout,
        gz_output.get_output().stdout
    );
}
