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

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    #[serde(alias = "amd64", alias = "x86_64")]
    X64,
    #[default]
    #[serde(alias = "arm64")]
    Aarch64,
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arch = match self {
            Architecture::X64 => "x64",
            Architecture::Aarch64 => "aarch64",
        };
        write!(f, "{arch}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatingSystem {
    Linux,
    Windows,
    #[default]
    #[serde(alias = "mac", alias = "darwin")]
    MacOS,
}

impl fmt::Display for OperatingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let os = match self {
            OperatingSystem::Linux => "linux",
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOS => "macos",
        };
        write!(f, "{os}")
    }
}

/// The (operating system, architecture) pair a JDK archive is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Platform {
    #[serde(default)]
    pub os: OperatingSystem,
    #[serde(default)]
    pub arch: Architecture,
}

impl Platform {
    pub fn new(os: OperatingSystem, arch: Architecture) -> Self {
        Self { os, arch }
    }

    /// Path from the archive root folder to the directory JAVA_HOME should point at.
    ///
    /// macOS JDKs ship as application bundles (`<name>.jdk/Contents/Home`).
    pub fn java_home_suffix(&self) -> &'static str {
        match self.os {
            OperatingSystem::MacOS => "Contents/Home",
            OperatingSystem::Linux | OperatingSystem::Windows => "",
        }
    }

    pub fn java_binary_name(&self) -> &'static str {
        match self.os {
            OperatingSystem::Windows => "java.exe",
            OperatingSystem::Linux | OperatingSystem::MacOS => "java",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
