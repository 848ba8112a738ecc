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

//! Detect whether we're running inside WSL.

use std::path::Path;

use tracing::debug;

use crate::host::Host;

/// Set by WSL in every distribution's environment.
pub static DISTRO_ENV_VAR: &str = "WSL_DISTRO_NAME";

/// Kernel version string, which names Microsoft on WSL kernels.
pub static PROC_VERSION: &str = "/proc/version";

/// True if this looks like a WSL distribution.
///
/// Never fails: an unreadable or missing `/proc/version` just means "not WSL".
pub fn is_wsl(host: &dyn Host) -> bool {
    if host
        .var(DISTRO_ENV_VAR)
        .is_some_and(|name| !name.is_empty())
    {
        debug!("{DISTRO_ENV_VAR} is set");
        return true;
    }
    match host.read_to_string(Path::new(PROC_VERSION)) {
        Ok(version) => version.to_lowercase().contains("microsoft"),
        Err(err) => {
            debug!(?err, "Can't read {PROC_VERSION}");
            false
        }
    }
}
