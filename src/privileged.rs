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

//! Run the privileged commands that create the mount point and mount the folder.
//!
//! Commands run under `sudo` with the terminal inherited, so the user sees
//! any password prompt and the tools' own messages directly.

use std::fmt;
use std::io;
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, instrument};

use crate::{Error, Result};

/// Program used to gain root.
pub static SUDO: &str = "sudo";

/// Filesystem type for Windows folders mounted in WSL.
pub static DRVFS: &str = "drvfs";

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, if the process exited normally.
    pub code: Option<i32>,
    /// Signal that killed the process, if any.
    pub signal: Option<i32>,
}

impl CommandStatus {
    pub fn exited(code: i32) -> CommandStatus {
        CommandStatus {
            code: Some(code),
            signal: None,
        }
    }

    pub fn killed(signal: i32) -> CommandStatus {
        CommandStatus {
            code: None,
            signal: Some(signal),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to pass on when this command failed.
    ///
    /// Falls back to 1 if the process didn't exit normally, or its code can't
    /// be used as a failing process exit status.
    pub fn exit_code(&self) -> u8 {
        self.code
            .and_then(|code| u8::try_from(code).ok())
            .filter(|code| *code != 0)
            .unwrap_or(1)
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = std::os::unix::process::ExitStatusExt::signal(&status);
        #[cfg(not(unix))]
        let signal = None;
        CommandStatus {
            code: status.code(),
            signal,
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "exit status {code}"),
            (None, Some(signal)) => write!(f, "killed by signal {signal}"),
            (None, None) => write!(f, "no exit status"),
        }
    }
}

/// Runs external commands to completion.
pub trait CommandRunner {
    /// Run `program` with `args`, wait for it, and return how it ended.
    ///
    /// An error means the program could not be started.
    fn run(&mut self, program: &str, args: &[&str]) -> io::Result<CommandStatus>;
}

/// Runs real processes, sharing this process's stdin, stdout, and stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> io::Result<CommandStatus> {
        Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map(CommandStatus::from)
    }
}

/// `sudo mkdir -p <mount_point>`
pub fn create_mount_point(runner: &mut dyn CommandRunner, mount_point: &str) -> Result<()> {
    run_privileged(runner, &["mkdir", "-p", mount_point])
}

/// `sudo mount -t drvfs <host_path> <mount_point>`
pub fn mount_drvfs(
    runner: &mut dyn CommandRunner,
    host_path: &str,
    mount_point: &str,
) -> Result<()> {
    run_privileged(runner, &["mount", "-t", DRVFS, host_path, mount_point])
}

#[instrument(skip(runner))]
fn run_privileged(runner: &mut dyn CommandRunner, args: &[&str]) -> Result<()> {
    let command = command_line(SUDO, args);
    debug!("Run {command}");
    let status = runner.run(SUDO, args).map_err(|source| Error::Spawn {
        command: command.clone(),
        source,
    })?;
    debug!(%status, "{command} finished");
    if status.success() {
        Ok(())
    } else {
        Err(Error::CommandFailed { command, status })
    }
}

/// Command line as text, for messages.
fn command_line(program: &str, args: &[&str]) -> String {
    let mut s = program.to_owned();
    for arg in args {
        s.push(' ');
        s.push_str(arg);
    }
    s
}
