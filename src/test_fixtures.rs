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

//! In-memory stand-ins for the system, for tests.
//!
//! Nothing here touches the real environment, home directory, or console,
//! and no command is really run.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::host::Host;
use crate::privileged::{CommandRunner, CommandStatus};

/// A [Host] with a fixed environment, a few files, and scripted answers.
#[derive(Debug, Default)]
pub struct FakeHost {
    vars: HashMap<String, String>,
    files: Mutex<HashMap<PathBuf, String>>,
    home: Option<PathBuf>,
    answers: Mutex<VecDeque<String>>,
    prompts: Mutex<usize>,
    appended: Mutex<Vec<(PathBuf, String)>>,
    fail_appends: bool,
}

impl FakeHost {
    pub fn new() -> FakeHost {
        FakeHost::default()
    }

    pub fn with_var(mut self, key: &str, value: &str) -> FakeHost {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn with_file<P: Into<PathBuf>>(self, path: P, content: &str) -> FakeHost {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_owned());
        self
    }

    pub fn with_home<P: Into<PathBuf>>(mut self, home: P) -> FakeHost {
        self.home = Some(home.into());
        self
    }

    /// Queue a reply for the next prompt.
    ///
    /// Prompting with no queued reply fails like a closed console.
    pub fn with_answer(self, answer: &str) -> FakeHost {
        self.answers.lock().unwrap().push_back(answer.to_owned());
        self
    }

    /// Make every append fail with a permission error.
    pub fn failing_appends(mut self) -> FakeHost {
        self.fail_appends = true;
        self
    }

    /// How many times the user was prompted.
    pub fn prompt_count(&self) -> usize {
        *self.prompts.lock().unwrap()
    }

    /// Successful appends, in order.
    pub fn appended(&self) -> Vec<(PathBuf, String)> {
        self.appended.lock().unwrap().clone()
    }
}

impl Host for FakeHost {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        if self.fail_appends {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        self.files
            .lock()
            .unwrap()
            .entry(path.to_owned())
            .or_default()
            .push_str(text);
        self.appended
            .lock()
            .unwrap()
            .push((path.to_owned(), text.to_owned()));
        Ok(())
    }

    fn prompt(&self, _question: &str) -> io::Result<String> {
        *self.prompts.lock().unwrap() += 1;
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| io::Error::from(io::ErrorKind::UnexpectedEof))
    }
}

/// One command run through a [RecordingRunner].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
}

impl Call {
    pub fn new(program: &str, args: &[&str]) -> Call {
        Call {
            program: program.to_owned(),
            args: args.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

/// A [CommandRunner] that remembers what it was asked to run.
///
/// Each run consumes the next scripted status; when none are left the
/// command succeeds.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    statuses: VecDeque<io::Result<CommandStatus>>,
    calls: Vec<Call>,
}

impl RecordingRunner {
    pub fn new() -> RecordingRunner {
        RecordingRunner::default()
    }

    pub fn then_status(mut self, status: CommandStatus) -> RecordingRunner {
        self.statuses.push_back(Ok(status));
        self
    }

    /// The next command can't be started at all.
    pub fn then_spawn_error(mut self, kind: io::ErrorKind) -> RecordingRunner {
        self.statuses.push_back(Err(io::Error::from(kind)));
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> io::Result<CommandStatus> {
        self.calls.push(Call::new(program, args));
        self.statuses
            .pop_front()
            .unwrap_or(Ok(CommandStatus::exited(0)))
    }
}
