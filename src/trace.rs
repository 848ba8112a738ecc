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

//! Send trace messages to stderr and optionally to a json log file.
//!
//! The command line takes no options, so tracing is configured from the
//! environment:
//!
//! * `WSLMOUNT_DEBUG`: if set and non-empty, show trace-level messages.
//! * `WSLMOUNT_TRACE_TIME`: timestamp style, one of `none`, `utc`, `local`, `relative`.
//! * `WSLMOUNT_LOG_JSON`: append a json formatted log to this file.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use tracing::{trace, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::Layer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

use crate::host::Host;

/// Chosen style of timestamp prefix on trace lines.
#[derive(ValueEnum, Clone, Debug, Default, PartialEq, Eq)]
pub enum TraceTimeStyle {
    /// No timestamp on trace lines.
    #[default]
    None,
    /// Universal time, in RFC 3339 style.
    Utc,
    /// Local time, in RFC 3339, using the offset when the program starts.
    Local,
    /// Time since the start of the process, in seconds.
    Relative,
}

pub static DEBUG_ENV_VAR: &str = "WSLMOUNT_DEBUG";
pub static TRACE_TIME_ENV_VAR: &str = "WSLMOUNT_TRACE_TIME";
pub static LOG_JSON_ENV_VAR: &str = "WSLMOUNT_LOG_JSON";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceOptions {
    pub time_style: TraceTimeStyle,
    /// Lowest level shown on stderr.
    pub console_level: Level,
    pub json_path: Option<PathBuf>,
}

impl Default for TraceOptions {
    fn default() -> Self {
        TraceOptions {
            time_style: TraceTimeStyle::None,
            console_level: Level::INFO,
            json_path: None,
        }
    }
}

impl TraceOptions {
    /// Read options from the environment.
    ///
    /// An unrecognized timestamp style is ignored.
    pub fn from_env(host: &dyn Host) -> TraceOptions {
        let set = |key: &str| host.var(key).filter(|value| !value.is_empty());
        TraceOptions {
            time_style: set(TRACE_TIME_ENV_VAR)
                .and_then(|value| TraceTimeStyle::from_str(&value, true).ok())
                .unwrap_or_default(),
            console_level: if set(DEBUG_ENV_VAR).is_some() {
                Level::TRACE
            } else {
                Level::INFO
            },
            json_path: set(LOG_JSON_ENV_VAR).map(PathBuf::from),
        }
    }
}

/// Install the global trace subscriber.
///
/// Messages from this crate at the console level or above go to stderr. If
/// a json path is given, everything is also appended there as json lines; the
/// returned guard must be held until exit so that they're flushed.
pub fn enable_tracing(options: &TraceOptions) -> io::Result<Option<WorkerGuard>> {
    use tracing_subscriber::fmt::time;

    let console_level = options.console_level;
    let json_path = options.json_path.as_deref();

    fn hookup<FT>(
        timer: FT,
        console_level: Level,
        json_path: Option<&Path>,
    ) -> io::Result<Option<WorkerGuard>>
    where
        FT: FormatTime + Send + Sync + 'static,
    {
        let console_layer = tracing_subscriber::fmt::Layer::default()
            .with_ansi(clicolors_control::colors_enabled())
            .with_target(false)
            .with_writer(io::stderr)
            .with_timer(timer)
            .with_filter(filter::Targets::new().with_target("wslmount", console_level));
        let mut flush_guard = None;
        let mut json_layer = None;
        if let Some(json_path) = json_path {
            let file_writer = OpenOptions::new()
                .create(true)
                .append(true)
                .open(json_path)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_writer);
            flush_guard = Some(guard);
            json_layer = Some(
                tracing_subscriber::fmt::Layer::default()
                    .json()
                    .with_writer(non_blocking),
            );
        }
        Registry::default()
            .with(console_layer)
            .with(json_layer)
            .init();
        Ok(flush_guard)
    }

    let flush_guard = match options.time_style {
        TraceTimeStyle::None => hookup((), console_level, json_path)?,
        TraceTimeStyle::Utc => hookup(time::UtcTime::rfc_3339(), console_level, json_path)?,
        TraceTimeStyle::Relative => hookup(time::uptime(), console_level, json_path)?,
        TraceTimeStyle::Local => match time::OffsetTime::local_rfc_3339() {
            Ok(timer) => hookup(timer, console_level, json_path)?,
            // The local offset can't be found once threads are running.
            Err(_) => hookup(time::UtcTime::rfc_3339(), console_level, json_path)?,
        },
    };
    trace!("Tracing enabled");
    Ok(flush_guard)
}
