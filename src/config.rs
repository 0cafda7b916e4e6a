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
use crate::models::platform::Platform;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "jdkswap.toml";
pub const ENV_PREFIX: &str = "JDKSWAP";

pub const DEFAULT_BASE_URL: &str = "https://corretto.aws/downloads/latest";
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_DUMP_DIR: &str = "jdk-dump";
pub const DEFAULT_TEMP_ARCHIVE: &str = "jdk-temp.tar.gz";
pub const DEFAULT_LINK_NAME: &str = "jdk";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdkSwapConfig {
    /// Directory that holds `jdk-dump/`, the temporary archive and the `jdk` link.
    #[serde(skip)]
    work_dir: PathBuf,

    #[serde(default)]
    pub platform: Platform,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Seconds to wait for a connection or for the next chunk of data.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl DownloadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_dump_dir")]
    pub dump_dir: String,

    #[serde(default = "default_temp_archive")]
    pub temp_archive: String,

    #[serde(default = "default_link_name")]
    pub link_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dump_dir: default_dump_dir(),
            temp_archive: default_temp_archive(),
            link_name: default_link_name(),
        }
    }
}

fn default_dump_dir() -> String {
    DEFAULT_DUMP_DIR.to_string()
}

fn default_temp_archive() -> String {
    DEFAULT_TEMP_ARCHIVE.to_string()
}

fn default_link_name() -> String {
    DEFAULT_LINK_NAME.to_string()
}

impl JdkSwapConfig {
    /// Default configuration rooted at `work_dir`, ignoring files and environment.
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            work_dir,
            platform: Platform::default(),
            catalog: CatalogConfig::default(),
            download: DownloadConfig::default(),
            storage: StorageConfig::default(),
        }
    }

    /// Load configuration for `work_dir`.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. built-in defaults
    /// 2. `jdkswap.toml` in `work_dir` (optional)
    /// 3. `JDKSWAP_*` environment variables, `__` separating nested keys
    ///    (e.g. `JDKSWAP_PLATFORM__ARCH=x64`)
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            log::debug!("Loading config from {}", config_path.display());
        } else {
            log::debug!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
        }

        let settings = Config::builder()
            .add_source(
                File::from(config_path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| JdkSwapError::ConfigError(format!("Failed to load config: {e}")))?;

        let mut config: JdkSwapConfig = settings
            .try_deserialize()
            .map_err(|e| JdkSwapError::ConfigError(format!("Failed to parse config: {e}")))?;
        config.work_dir = work_dir.to_path_buf();
        config.validate()?;

        log::trace!("Effective config: {config:?}");
        Ok(config)
    }

    /// Load configuration rooted at the process's current directory.
    pub fn load_from_current_dir() -> Result<Self> {
        let work_dir = std::env::current_dir()?;
        Self::load(&work_dir)
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn validate(&self) -> Result<()> {
        if self.download.timeout_secs == 0 {
            return Err(JdkSwapError::InvalidConfig(
                "download.timeout_secs must be greater than zero".to_string(),
            ));
        }

        if self.catalog.base_url.trim().is_empty() {
            return Err(JdkSwapError::InvalidConfig(
                "catalog.base_url must not be empty".to_string(),
            ));
        }

        for (key, value) in [
            ("storage.dump_dir", &self.storage.dump_dir),
            ("storage.temp_archive", &self.storage.temp_archive),
            ("storage.link_name", &self.storage.link_name),
        ] {
            if value.trim().is_empty() {
                return Err(JdkSwapError::InvalidConfig(format!(
                    "{key} must not be empty"
                )));
            }
        }

        Ok(())
    }
}
