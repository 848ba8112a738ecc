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

//! Find the Windows base path, asking for it and saving it on first use.
//!
//! The saved form is an `export` line appended to the user's shell startup
//! file, so later shells see the variable and don't ask again.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::host::Host;
use crate::{Error, Result, BASE_ENV_VAR};

/// Startup files under the home directory, most preferred first.
pub static STARTUP_FILES: &[&str] = &[".bashrc", ".zshrc", ".profile"];

pub static PROMPT: &str = r"Enter Windows base path for mounts (e.g. C:\Your\Folder): ";

/// Windows directory under which subfolders are mounted.
///
/// Always non-empty, and never ends in a slash or backslash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    /// Trim whitespace and trailing separators.
    ///
    /// Returns None if nothing is left.
    pub fn new(raw: &str) -> Option<BasePath> {
        let normalized = normalize_base(raw.trim());
        if normalized.is_empty() {
            None
        } else {
            Some(BasePath(normalized.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip all trailing forward and back slashes.
pub fn normalize_base(base: &str) -> &str {
    base.trim_end_matches(['/', '\\'])
}

/// Quote a value for a POSIX shell, inside single quotes.
pub fn shell_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Lines appended to the startup file to remember the base path.
pub fn export_block(base: &BasePath) -> String {
    format!(
        "\n# Added by wslmount\nexport {BASE_ENV_VAR}={};\n",
        shell_single_quote(base.as_str())
    )
}

/// Candidate startup files, in order of preference.
pub fn startup_candidates(home: &Path) -> Vec<PathBuf> {
    STARTUP_FILES.iter().map(|name| home.join(name)).collect()
}

/// The first candidate startup file that exists, or else the most preferred one.
pub fn choose_startup_file(host: &dyn Host) -> Option<PathBuf> {
    let candidates = startup_candidates(&host.home_dir()?);
    let existing = candidates.iter().find(|path| host.exists(path)).cloned();
    existing.or_else(|| candidates.into_iter().next())
}

/// Append the base path to the user's startup file, returning the file written.
pub fn save_base_path(host: &dyn Host, base: &BasePath) -> io::Result<PathBuf> {
    let path = choose_startup_file(host)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "home directory not found"))?;
    host.append(&path, &export_block(base))?;
    Ok(path)
}

/// Return the base path from the environment, or ask for it and save it.
///
/// Returns `Ok(None)` if the user gave an empty answer. A failure to save the
/// answer is only a warning: the path is still used for this run.
#[instrument(skip(host))]
pub fn ensure_base_path(host: &dyn Host) -> Result<Option<BasePath>> {
    if let Some(value) = host.var(BASE_ENV_VAR) {
        if !value.trim().is_empty() {
            let base = BasePath::new(&value);
            debug!(?base, "Base path from {BASE_ENV_VAR}");
            return Ok(base);
        }
    }
    let answer = host
        .prompt(PROMPT)
        .map_err(|source| Error::Prompt { source })?;
    let Some(base) = BasePath::new(&answer) else {
        return Ok(None);
    };
    match save_base_path(host, &base) {
        Ok(path) => info!("Saved {BASE_ENV_VAR} to {}", path.display()),
        Err(err) => warn!("Failed to write {BASE_ENV_VAR} to shell rc: {err}"),
    }
    Ok(Some(base))
}
