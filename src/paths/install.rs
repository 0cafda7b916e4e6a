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
use std::path::PathBuf;

pub const BIN_DIR: &str = "bin";

/// `<work_dir>/jdk-dump`
pub fn dump_root(config: &JdkSwapConfig) -> PathBuf {
    config.work_dir().join(&config.storage.dump_dir)
}

/// `<work_dir>/jdk-dump/<version>`, the directory an archive is extracted into.
pub fn version_directory(config: &JdkSwapConfig, entry: &JdkEntry) -> PathBuf {
    dump_root(config).join(&entry.version_label)
}

/// `<version dir>/<archive root folder>`
pub fn installation_root(config: &JdkSwapConfig, entry: &JdkEntry) -> PathBuf {
    version_directory(config, entry).join(&entry.archive_root_folder_name)
}

/// The directory the published link points at (`.../Contents/Home` on macOS).
pub fn java_home(config: &JdkSwapConfig, entry: &JdkEntry) -> PathBuf {
    let root = installation_root(config, entry);
    let suffix = entry.platform.java_home_suffix();
    if suffix.is_empty() {
        root
    } else {
        root.join(suffix)
    }
}

pub fn java_binary(config: &JdkSwapConfig, entry: &JdkEntry) -> PathBuf {
    java_home(config, entry)
        .join(BIN_DIR)
        .join(entry.platform.java_binary_name())
}

/// `<work_dir>/jdk-temp.tar.gz`
pub fn temp_archive(config: &JdkSwapConfig) -> PathBuf {
    config.work_dir().join(&config.storage.temp_archive)
}

/// `<work_dir>/jdk`
pub fn link_path(config: &JdkSwapConfig) -> PathBuf {
    config.work_dir().join(&config.storage.link_name)
}
