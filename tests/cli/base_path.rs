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

//! Tests of asking for the base path when it's not configured.

use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

use crate::run_wslmount;

#[test]
fn empty_answer() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .arg("proj")
        .write_stdin("\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Enter Windows base path for mounts (e.g. C:\\Your\\Folder): ",
        ))
        .stderr(predicate::str::contains("No base path provided."));
    home.child(".bashrc").assert(predicate::path::missing());
}

#[test]
fn whitespace_answer() {
    let home = TempDir::new().unwrap();
    home.child(".profile").write_str("umask 022\n").unwrap();
    run_wslmount(home.path())
        .arg("proj")
        .write_stdin("   \t \n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No base path provided."));
    home.child(".profile").assert("umask 022\n");
}

#[test]
fn end_of_input() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .arg("proj")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No base path provided."));
}

#[test]
fn path_made_only_of_separators() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .env("WSLMOUNT_BASE", "\\\\")
        .arg("proj")
        .write_stdin("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Enter Windows base path").not())
        .stderr(predicate::str::contains("No base path provided."));
}
