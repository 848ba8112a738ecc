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

//! Access to the process environment, the user's files, and the console.
//!
//! Detection and configuration go through [Host] so that tests can substitute
//! [crate::test_fixtures::FakeHost] and never touch the real home directory.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::trace;

pub trait Host: std::fmt::Debug {
    /// Value of an environment variable, if it's set and valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// The user's home directory, if it can be determined.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Append text to a file, creating it if it doesn't exist.
    ///
    /// Existing content is never rewritten.
    fn append(&self, path: &Path, text: &str) -> io::Result<()>;

    /// Show a question and read one line of reply.
    ///
    /// The reply is returned without its line ending. End of input gives an empty string.
    fn prompt(&self, question: &str) -> io::Result<String>;
}

/// The real system: process environment, local files, and the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHost;

impl Host for LocalHost {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        trace!(?path, len = text.len(), "append");
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(text.as_bytes())
    }

    fn prompt(&self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(question.as_bytes())?;
        stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }
}
