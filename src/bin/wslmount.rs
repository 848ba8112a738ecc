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

//! Command-line entry point for wslmount.

use std::error::Error as _;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{debug, error};

use wslmount::trace::{enable_tracing, TraceOptions};
use wslmount::*;

/// Mount a folder under your Windows base path at /mnt/<SUBFOLDER>.
///
/// The base path comes from $WSLMOUNT_BASE. If that's not set you're asked
/// for it once, and it's saved to your shell startup file.
///
/// There are no options: anything starting with `-` is a usage error. Tracing
/// is controlled by `WSLMOUNT_DEBUG`, `WSLMOUNT_TRACE_TIME` and `WSLMOUNT_LOG_JSON`.
#[derive(Debug, Parser)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Name of the folder under the base path.
    subfolder: String,
}

fn main() -> ExitCode {
    let trace_options = TraceOptions::from_env(&LocalHost);
    let _guard = match enable_tracing(&trace_options) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to open json log file: {err}");
            return ExitCode::FAILURE;
        }
    };
    debug!(version = wslmount::version(), ?trace_options);
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // The environment is checked before the arguments.
            if !is_wsl(&LocalHost) {
                error!("{}", Error::NotWsl);
            } else {
                let _ = err.print();
            }
            return ExitCode::FAILURE;
        }
    };
    match mount_subfolder(&LocalHost, &mut SystemRunner, &args.subfolder) {
        Ok(_paths) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                error!("caused by: {cause}");
                source = cause.source();
            }
            if matches!(err, Error::Usage { .. }) {
                eprintln!("{}", Args::command().render_usage());
            }
            ExitCode::from(err.exit_code())
        }
    }
}

#[test]
fn verify_clap() {
    Args::command().debug_assert()
}
