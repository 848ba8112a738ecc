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

//! Mount one subfolder: check the environment, find the base path, then
//! create the mount point and mount.
//!
//! This is a single attempt. Nothing is retried, and a mount point created
//! before a failed mount is left in place.

use tracing::{debug, instrument};

use crate::config::ensure_base_path;
use crate::detect::is_wsl;
use crate::host::Host;
use crate::paths::MountPaths;
use crate::privileged::{create_mount_point, mount_drvfs, CommandRunner};
use crate::{Error, Result};

/// Check a subfolder name from the command line.
///
/// It must be present and must not look like an option.
pub fn check_subfolder(name: &str) -> Result<&str> {
    if name.is_empty() || name.starts_with('-') {
        Err(Error::Usage {
            name: name.to_owned(),
        })
    } else {
        Ok(name)
    }
}

/// Mount `<base>\<subfolder>` at `/mnt/<subfolder>`.
///
/// On success returns the paths that were mounted.
#[instrument(skip(host, runner))]
pub fn mount_subfolder(
    host: &dyn Host,
    runner: &mut dyn CommandRunner,
    subfolder: &str,
) -> Result<MountPaths> {
    if !is_wsl(host) {
        return Err(Error::NotWsl);
    }
    let subfolder = check_subfolder(subfolder)?;
    let base = ensure_base_path(host)?.ok_or(Error::NoBasePath)?;
    let paths = MountPaths::new(&base, subfolder);
    debug!(?paths);
    create_mount_point(runner, &paths.mount_point)?;
    mount_drvfs(runner, &paths.host_path, &paths.mount_point)?;
    debug!("Mounted {} at {}", paths.host_path, paths.mount_point);
    Ok(paths)
}
