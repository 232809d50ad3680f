use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

#[allow(deprecated)]
fn get_fledge_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("fledge")
}

#[cfg(target_os = "macos")]
fn chrome_profile_under(home: &Path) -> PathBuf {
    home.join("Library/Application Support/Google/Chrome/Default")
}

#[cfg(not(target_os = "macos"))]
fn chrome_profile_under(home: &Path) -> PathBuf {
    home.join(".config/google-chrome/Default")
}

/// Fabricate a Chrome profile under a throwaway home directory.
fn write_chrome_profile(home: &Path) -> PathBuf {
    let profile = chrome_profile_under(home);
    fs::create_dir_all(profile.join("Extensions/ext/1.0")).unwrap();
    fs::write(profile.join("SingletonLock"), b"").unwrap();
    fs::write(profile.join("Cookies"), b"cookie data").unwrap();
    fs::write(profile.join("Extensions/ext/1.0/background.js"), b"js").unwrap();
    fs::write(profile.join("Extensions/ext/1.0/state.lock"), b"").unwrap();
    profile
}

/// Command with $HOME pointed at the throwaway home.
fn fledge_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(get_fledge_bin());
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

#[test]
fn test_clone_copies_profile_without_lock_markers() {
    let home = tempfile::tempdir().unwrap();
    write_chrome_profile(home.path());
    let dest = home.path().join("work-profile");

    let mut cmd = fledge_cmd(home.path());
    cmd.arg("clone").arg(&dest);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cloned"));

    assert!(dest.join("Cookies").exists());
    assert!(dest.join("Extensions/ext/1.0/background.js").exists());
    assert!(!dest.join("SingletonLock").exists());
    assert!(!dest.join("Extensions/ext/1.0/state.lock").exists());
}

#[test]
fn test_clone_defaults_to_automation_profile_dir() {
    let home = tempfile::tempdir().unwrap();
    write_chrome_profile(home.path());

    let mut cmd = fledge_cmd(home.path());
    cmd.arg("clone");

    cmd.assert().success();

    let dest = home.path().join("AutomationProfile");
    assert!(dest.join("Cookies").exists());
    assert!(!dest.join("SingletonLock").exists());
}

#[test]
fn test_clone_replaces_existing_destination() {
    let home = tempfile::tempdir().unwrap();
    write_chrome_profile(home.path());
    let dest = home.path().join("work-profile");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("stale-file"), b"old").unwrap();

    let mut cmd = fledge_cmd(home.path());
    cmd.arg("clone").arg(&dest);

    cmd.assert().success();

    assert!(!dest.join("stale-file").exists());
    assert!(dest.join("Cookies").exists());
}

#[test]
fn test_clone_fails_without_chrome_profile() {
    let home = tempfile::tempdir().unwrap();
    let dest = home.path().join("work-profile");

    let mut cmd = fledge_cmd(home.path());
    cmd.arg("clone").arg(&dest);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));

    assert!(!dest.exists());
}

#[test]
fn test_clone_command_help() {
    let mut cmd = Command::new(get_fledge_bin());
    cmd.arg("clone").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Clone the Chrome profile into a working copy",
        ))
        .stdout(predicate::str::contains("DEST"))
        .stdout(predicate::str::contains("~/AutomationProfile"));
}
