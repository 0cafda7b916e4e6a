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

//! The fixed table of JDK versions the switcher offers.

use crate::error::{JdkSwapError, Result};
use crate::models::platform::{OperatingSystem, Platform};
use std::collections::HashSet;

/// Amazon Corretto major versions, newest first. This is also the prompt order.
pub const CORRETTO_VERSIONS: [&str; 4] = ["21", "17", "11", "8"];

/// A single selectable JDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JdkEntry {
    pub version_label: String,
    pub download_url: String,
    /// Name of the single top-level directory inside the downloaded archive.
    pub archive_root_folder_name: String,
    pub platform: Platform,
}

impl JdkEntry {
    pub fn new(
        version_label: impl Into<String>,
        download_url: impl Into<String>,
        archive_root_folder_name: impl Into<String>,
        platform: Platform,
    ) -> Self {
        Self {
            version_label: version_label.into(),
            download_url: download_url.into(),
            archive_root_folder_name: archive_root_folder_name.into(),
            platform,
        }
    }

    fn corretto(version: &str, platform: Platform, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self::new(
            version,
            format!(
                "{base_url}/amazon-corretto-{version}-{}-{}-jdk.tar.gz",
                platform.arch, platform.os
            ),
            format!("amazon-corretto-{version}.jdk"),
            platform,
        )
    }
}

/// Immutable, ordered collection of [`JdkEntry`] values with unique labels.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<JdkEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate version labels.
    pub fn from_entries(entries: Vec<JdkEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.version_label.as_str()) {
                return Err(JdkSwapError::InvalidConfig(format!(
                    "Duplicate version label '{}' in catalog",
                    entry.version_label
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The Amazon Corretto catalog for `platform`, downloading from `base_url`.
    ///
    /// Only macOS bundles are supported: the archive folder names and the
    /// `Contents/Home` layout the switcher relies on are specific to them.
    pub fn corretto(platform: Platform, base_url: &str) -> Result<Self> {
        if platform.os != OperatingSystem::MacOS {
            return Err(JdkSwapError::UnsupportedPlatform(platform.to_string()));
        }

        let entries = CORRETTO_VERSIONS
            .iter()
            .map(|version| JdkEntry::corretto(version, platform, base_url))
            .collect();
        log::debug!("Built Corretto catalog for {platform} from {base_url}");
        Self::from_entries(entries)
    }

    pub fn entries(&self) -> &[JdkEntry] {
        &self.entries
    }

    /// Version labels in catalog order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.version_label.as_str())
            .collect()
    }

    pub fn lookup(&self, version_label: &str) -> Result<&JdkEntry> {
        self.entries
            .iter()
            .find(|entry| entry.version_label == version_label)
            .ok_or_else(|| JdkSwapError::VersionNotFound(version_label.to_string()))
    }
}
