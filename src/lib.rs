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

//! Mount a folder under a configured Windows base path at `/mnt/<name>` inside WSL.
//!
//! The base path is read from [BASE_ENV_VAR], or asked for once and then
//! saved into the user's shell startup file.

pub mod config;
pub mod detect;
pub mod errors;
pub mod host;
pub mod mount;
pub mod paths;
pub mod privileged;
pub mod test_fixtures;
pub mod trace;

pub use crate::config::{ensure_base_path, normalize_base, BasePath};
pub use crate::detect::is_wsl;
pub use crate::errors::{Error, Result};
pub use crate::host::{Host, LocalHost};
pub use crate::mount::mount_subfolder;
pub use crate::paths::{host_path, mount_point, MountPaths, MOUNT_PARENT};
pub use crate::privileged::{CommandRunner, CommandStatus, SystemRunner};

/// Environment variable holding the Windows base path for mounts.
pub static BASE_ENV_VAR: &str = "WSLMOUNT_BASE";

pub(crate) static VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}
