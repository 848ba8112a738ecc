// Copyright 2026 Martin Pool

//! Tests for trace settings of the wslmount CLI, which come from the environment.

use std::fs::read_to_string;

use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

use crate::run_wslmount;

#[test]
fn debug_shows_trace() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .env("WSLMOUNT_DEBUG", "1")
        .args(["--", "-x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TRACE Tracing enabled"));
}

#[test]
fn no_trace_by_default() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .args(["--", "-x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Tracing enabled").not());
}

#[test]
fn json_log() {
    let home = TempDir::new().unwrap();
    let log = home.child("log.json");
    run_wslmount(home.path())
        .env("WSLMOUNT_LOG_JSON", log.path())
        .arg("proj")
        .write_stdin("\n")
        .assert()
        .code(1);
    let content = read_to_string(log.path()).unwrap();
    for line in content.lines() {
        assert!(line.starts_with('{'), "not json: {line:?}");
    }
    assert!(content.contains("No base path provided."), "{content}");
}

#[test]
fn utc_timestamps() {
    let home = TempDir::new().unwrap();
    run_wslmount(home.path())
        .env("WSLMOUNT_DEBUG", "1")
        .env("WSLMOUNT_TRACE_TIME", "utc")
        .args(["--", "-x"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_match(r"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}").unwrap());
}
