use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn converts_and_stays_silent() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let source = dir.child("rom.bin");
    source.write_binary(&[0x00, 0x41, 0xff, 0x0a])?;
    let destination = dir.child("rom.mem");

    let mut cmd = Command::cargo_bin("bin2hex")?;
    cmd.arg(source.path()).arg(destination.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    destination.assert("00\n41\nff\n0a\n");
    Ok(())
}

#[test]
fn missing_source_fails_with_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let destination = dir.child("out.mem");

    let mut cmd = Command::cargo_bin("bin2hex")?;
    cmd.arg(dir.child("absent.bin").path()).arg(destination.path());
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("source file not found"))
        .stderr(predicate::str::contains("absent.bin"));

    destination.assert(predicate::path::missing());
    Ok(())
}

#[test]
fn unwritable_destination_fails_with_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let source = dir.child("in.bin");
    source.write_binary(&[0xde, 0xad])?;

    let mut cmd = Command::cargo_bin("bin2hex")?;
    cmd.arg(source.path()).arg(dir.child("missing-dir/out.mem").path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot write destination file"));
    Ok(())
}

#[test]
fn missing_arguments_are_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("bin2hex")?;
    cmd.arg("only-one.bin");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    let mut cmd = Command::cargo_bin("bin2hex")?;
    cmd.assert()
        .failure()
        .code(2);
    Ok(())
}

#[test]
fn debug_logging_goes_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let source = dir.child("in.bin");
    source.write_binary(b"ok")?;
    let destination = dir.child("out.mem");

    let mut cmd = Command::cargo_bin("bin2hex")?;
    cmd.arg(source.path())
        .arg(destination.path())
        .arg("--log-level")
        .arg("debug");
    cmd.assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("conversion complete"));

    destination.assert("6f\n6b\n");
    Ok(())
}
