//! Integration tests for the `dsh` binary.
//!
//! These tests exercise argument parsing, one-shot commands and the
//! interactive loop through a real process.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Get a command for running dsh with config lookup pointed at nothing.
fn dsh(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("dsh").unwrap();
    cmd.env_remove("DIRSHELL_CONFIG")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

#[test]
fn version_flag_works() {
    let home = TempDir::new().unwrap();
    dsh(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dsh"));
}

#[test]
fn help_flag_lists_session_commands() {
    let home = TempDir::new().unwrap();
    dsh(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SESSION COMMANDS"));
}

#[test]
fn one_shot_commands_run_in_order() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    dsh(&home)
        .arg("--cwd")
        .arg(work.path())
        .args(["-c", "mkdir docs", "-c", "touch docs/a.txt", "-c", "cd docs", "-c", "ls"])
        .assert()
        .success()
        .stdout("a.txt\n");

    work.child("docs/a.txt").assert(predicate::path::is_file());
}

#[test]
fn one_shot_reports_outcomes_on_stdout() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    dsh(&home)
        .arg("--cwd")
        .arg(work.path())
        .args(["-c", "file missing.txt", "-c", "ls -z"])
        .assert()
        .success()
        .stdout("File missing.txt does not exist\nInvalid flag -z\n");
}

#[test]
fn interactive_session_reads_stdin() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    work.child("notes.txt").write_str("remember the milk").unwrap();

    dsh(&home)
        .arg("--quiet")
        .arg("--cwd")
        .arg(work.path())
        .write_stdin("sfile notes.txt milk\nexit\nrmfile notes.txt\n")
        .assert()
        .success()
        .stdout("File notes.txt contains substring: milk\n");

    work.child("notes.txt").assert(predicate::path::exists());
}

#[test]
fn interactive_prompt_shows_directory() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let canonical = work.path().canonicalize().unwrap();

    dsh(&home)
        .arg("--cwd")
        .arg(work.path())
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{}: ", canonical.display())))
        .stdout(predicate::str::contains("rndir [directory_name]"));
}

#[test]
fn missing_cwd_fails() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    dsh(&home)
        .arg("--cwd")
        .arg(work.path().join("nope"))
        .args(["-c", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: start directory"));
}

#[test]
fn config_file_sets_preview_length() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    home.child("dirshell/config.toml")
        .write_str("preview_chars = 5\n")
        .unwrap();
    work.child("long.txt").write_str("0123456789").unwrap();

    dsh(&home)
        .arg("--cwd")
        .arg(work.path())
        .args(["-c", "file long.txt"])
        .assert()
        .success()
        .stdout("01234\n");
}

#[test]
fn config_start_dir_is_used() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    work.child("marker.txt").touch().unwrap();
    home.child("dirshell/config.toml")
        .write_str(&format!("start_dir = {:?}\n", work.path().display().to_string()))
        .unwrap();

    dsh(&home)
        .args(["-c", "ls"])
        .assert()
        .success()
        .stdout("marker.txt\n");
}

#[test]
fn invalid_config_fails() {
    let home = TempDir::new().unwrap();
    home.child("dirshell/config.toml")
        .write_str("colour = true\n")
        .unwrap();

    dsh(&home)
        .args(["-c", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    dsh(&home)
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_dsh"));
}

#[test]
fn invalid_flag_never_lists_directory() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let vanish = ["-c", "mkdir gone", "-c", "cd gone", "-c", "rmdir ../gone"];

    // Listing a directory that no longer exists warns on stderr
    dsh(&home)
        .arg("--cwd")
        .arg(work.path())
        .args(vanish)
        .args(["-c", "ls"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("warning: Could not fetch"));

    dsh(&home)
        .arg("--cwd")
        .arg(work.path())
        .args(vanish)
        .args(["-c", "ls -s -x"])
        .assert()
        .success()
        .stdout("Invalid flag -x\n")
        .stderr("");
}
