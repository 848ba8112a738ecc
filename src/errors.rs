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

//! wslmount error types.

use std::io;

use thiserror::Error;

use crate::privileged::CommandStatus;

/// Errors that stop a mount.
///
/// Failing to save the base path is not among them: that is only warned about.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("wslmount must be run inside WSL.")]
    NotWsl,

    #[error("Invalid subfolder name {name:?}")]
    Usage { name: String },

    #[error("No base path provided.")]
    NoBasePath,

    #[error("Failed to read base path from the console")]
    Prompt {
        #[source]
        source: io::Error,
    },

    #[error("Failed to run {command:?}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Command {command:?} failed: {status}")]
    CommandFailed {
        command: String,
        status: CommandStatus,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The process exit code that reports this error.
    ///
    /// A failed privileged command passes on its own exit code, falling back to 1
    /// when there is none or it can't be used as a process exit status.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::CommandFailed { status, .. } => status.exit_code(),
            _ => 1,
        }
    }
}
