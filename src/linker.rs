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

use crate::catalog::JdkEntry;
use crate::config::JdkSwapConfig;
use crate::error::{JdkSwapError, Result};
use crate::paths::install;
use crate::platform::permissions;
use crate::platform::symlink::{create_dir_symlink, remove_link};
use colored::Colorize;
use std::path::PathBuf;

/// Make `entry` the active JDK by repointing the `jdk` link at its JAVA_HOME.
///
/// Steps run in order and stop at the first failure:
/// 1. chmod 755 the `java` binary
/// 2. remove the existing link, if any
/// 3. create the new link
///
/// A failure between 2 and 3 leaves no link behind.
///
/// Returns the link target.
pub fn publish(config: &JdkSwapConfig, entry: &JdkEntry) -> Result<PathBuf> {
    let java_binary = install::java_binary(config, entry);
    permissions::make_executable(&java_binary)?;
    println!(
        "{}",
        format!(
            "Execute permission set successfully on: {}",
            java_binary.display()
        )
        .blue()
    );

    let link = install::link_path(config);
    let target = install::java_home(config, entry);

    if remove_link(&link).map_err(|e| {
        JdkSwapError::Link(format!(
            "Cannot remove existing link {}: {e}",
            link.display()
        ))
    })? {
        log::debug!("Removed previous link at {}", link.display());
    }

    create_dir_symlink(&target, &link).map_err(|e| {
        JdkSwapError::Link(format!(
            "Cannot create link {} -> {}: {e}",
            link.display(),
            target.display()
        ))
    })?;

    println!(
        "{}",
        format!(
            "Symbolic link created: {} -> {}",
            config.storage.link_name,
            target.display()
        )
        .blue()
    );
    log::info!("Published JDK {} at {}", entry.version_label, link.display());
    Ok(target)
}
