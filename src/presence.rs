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
use crate::paths::install;
use colored::Colorize;
use std::fs;
use std::io::ErrorKind;

/// Whether `entry` has already been extracted under the working directory.
///
/// Looks for the `java` binary inside the extracted tree. Stat failures other
/// than "not found" are logged and reported as not installed.
pub fn is_installed(config: &JdkSwapConfig, entry: &JdkEntry) -> bool {
    let java_binary = install::java_binary(config, entry);

    match fs::metadata(&java_binary) {
        Ok(_) => {
            println!(
                "{}",
                format!("JDK is already present at {}", java_binary.display()).yellow()
            );
            true
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No java binary at {}", java_binary.display());
            false
        }
        Err(e) => {
            log::warn!(
                "Could not check {}: {e}. Treating JDK {} as not installed",
                java_binary.display(),
                entry.version_label
            );
            false
        }
    }
}
