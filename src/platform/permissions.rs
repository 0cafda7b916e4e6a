// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{JdkSwapError, Result};
use std::io;
use std::path::Path;

/// Mode applied to the runtime binary when publishing.
pub const EXECUTABLE_MODE: u32 = 0o755;

/// Set the permission bits of `path` (no-op on Windows).
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        set_mode_unix(path, mode)
    }

    #[cfg(windows)]
    {
        let _ = (path, mode);
        Ok(())
    }
}

/// Make `path` executable by owner, group and others.
pub fn make_executable(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(JdkSwapError::PermissionDenied(format!(
            "{} does not exist",
            path.display()
        )));
    }

    set_mode(path, EXECUTABLE_MODE).map_err(|e| {
        JdkSwapError::PermissionDenied(format!("{}: {e}", path.display()))
    })?;
    log::debug!("Set mode {EXECUTABLE_MODE:o} on {}", path.display());
    Ok(())
}

/// Whether `path` is a regular file with any execute bit set.
pub fn is_executable(path: &Path) -> io::Result<bool> {
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Ok(false);
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Ok(metadata.permissions().mode() & 0o111 != 0)
    }

    #[cfg(windows)]
    {
        Ok(path.extension().is_some_and(|ext| ext == "exe"))
    }
}

#[cfg(unix)]
fn set_mode_unix(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}
