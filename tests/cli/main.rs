// wslmount: mount Windows folders inside WSL.
// Copyright 2026 Martin Pool.

// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

//! Run the wslmount CLI as a subprocess and test it.
//!
//! These never get as far as running `sudo`: each test stops at the
//! environment check, argument check, or base path prompt.

use std::path::Path;

use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

mod base_path;
mod trace;

/// Run wslmount in an isolated environment that looks like WSL.
///
/// `home` stands in for the user's home directory.
fn run_wslmount(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wslmount").expect("locate wslmount binary");
    cmd.env_remove("WSLMOUNT_BASE")
        .env_remove("WSLMOUNT_DEBUG")
        .env_remove("WSLMOUNT_TRACE_TIME")
        .env_remove("WSLMOUNT_LOG_JSON")
        .env("WSL_DISTRO_NAME", "Ubuntu")
        .env("HOME", home);
    cmd
}

/// True if this machine's kernel is a WSL kernel, in which case we can't
/// pretend not to be in WSL.
fn running_on_wsl_kernel() -> bool {
    std::fs::read_to_string("/proc/version")
        .map(|v| v.to_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

#[test]
fn no_args() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn option_instead_of_subfolder() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .arg("-x")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn dash_subfolder_after_double_dash() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .args(["--", "-x"])
        .write_stdin("C:\\src\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Enter Windows base path").not())
        .stderr(predicate::str::contains("Invalid subfolder name \"-x\""))
        .stderr(predicate::str::contains("Usage:"));
    assert!(!home.path().join(".bashrc").exists());
}

#[test]
fn help_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn version_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .arg("--version")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn option_before_subfolder_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .args(["-D", "proj"])
        .write_stdin("C:\\src\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Enter Windows base path").not())
        .stderr(predicate::str::contains("Usage:"));
    assert!(!home.path().join(".bashrc").exists());
}

#[test]
fn not_wsl() {
    if running_on_wsl_kernel() {
        return;
    }
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .env_remove("WSL_DISTRO_NAME")
        .env("WSLMOUNT_BASE", "C:\\src")
        .arg("proj")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wslmount must be run inside WSL."))
        .stderr(predicate::str::contains("sudo").not());
}

#[test]
fn not_wsl_is_reported_before_usage() {
    if running_on_wsl_kernel() {
        return;
    }
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .env_remove("WSL_DISTRO_NAME")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wslmount must be run inside WSL."))
        .stderr(predicate::str::contains("Usage:").not());
}

#[test]
fn not_wsl_is_reported_instead_of_help() {
    if running_on_wsl_kernel() {
        return;
    }
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .env_remove("WSL_DISTRO_NAME")
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wslmount must be run inside WSL."));
}
