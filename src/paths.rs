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

//! Windows-side and Linux-side paths for a mount.
//!
//! The subfolder name is used exactly as given on both sides: it's not
//! escaped or checked for separators or `..`.

use crate::config::BasePath;

/// Directory under which mount points are created.
pub static MOUNT_PARENT: &str = "/mnt";

/// Separator in Windows paths.
pub const WINDOWS_SEPARATOR: char = '\\';

/// Windows path of `subfolder` under an already-normalized base.
pub fn host_path(base: &str, subfolder: &str) -> String {
    format!("{base}{WINDOWS_SEPARATOR}{subfolder}")
}

/// Linux directory where `subfolder` is mounted.
pub fn mount_point(subfolder: &str) -> String {
    format!("{MOUNT_PARENT}/{subfolder}")
}

/// Both ends of one mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPaths {
    /// Windows path of the folder to mount, like `C:\Users\Me\proj`.
    pub host_path: String,
    /// Linux directory, like `/mnt/proj`.
    pub mount_point: String,
}

impl MountPaths {
    pub fn new(base: &BasePath, subfolder: &str) -> MountPaths {
        MountPaths {
            host_path: host_path(base.as_str(), subfolder),
            mount_point: mount_point(subfolder),
        }
    }
}
