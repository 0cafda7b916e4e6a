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

use crate::archive::extract_tar_gz;
use crate::catalog::{Catalog, JdkEntry};
use crate::config::JdkSwapConfig;
use crate::download;
use crate::error::Result;
use crate::linker;
use crate::paths::install;
use crate::presence;
use crate::selector::{self, VersionPrompt};
use colored::Colorize;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

pub struct SwitchCommand<'a> {
    config: &'a JdkSwapConfig,
    catalog: &'a Catalog,
    no_progress: bool,
}

impl<'a> SwitchCommand<'a> {
    pub fn new(config: &'a JdkSwapConfig, catalog: &'a Catalog, no_progress: bool) -> Result<Self> {
        Ok(Self {
            config,
            catalog,
            no_progress,
        })
    }

    /// Select a version, install it when missing and point the `jdk` link at it.
    ///
    /// Returns the JAVA_HOME the link now resolves to.
    pub fn execute(&self, prompt: &mut dyn VersionPrompt) -> Result<PathBuf> {
        let entry = selector::select(self.catalog, prompt)?;
        info!("Selected JDK {} ({})", entry.version_label, entry.platform);

        if !presence::is_installed(self.config, entry) {
            self.install(entry)?;
        }

        println!();
        println!();
        let java_home = linker::publish(self.config, entry)?;

        self.print_export_hint();
        Ok(java_home)
    }

    fn install(&self, entry: &JdkEntry) -> Result<()> {
        let temp_archive = install::temp_archive(self.config);
        let version_dir = install::version_directory(self.config, entry);

        println!("Downloading Java {}", entry.version_label);
        debug!("Fetching {}", entry.download_url);
        download::download(
            &entry.download_url,
            &temp_archive,
            self.config.download.timeout(),
            self.no_progress,
        )?;
        println!("File downloaded successfully: {}", temp_archive.display());

        extract_tar_gz(&temp_archive, &version_dir)?;
        println!("File unzipped successfully.");

        fs::remove_file(&temp_archive)?;
        println!("File deleted: {}", temp_archive.display());
        Ok(())
    }

    fn print_export_hint(&self) {
        println!();
        println!();
        println!(
            "{}",
            "Please add the following to your bash profile, ignore if you have already done it"
                .blue()
        );
        println!(
            "{}",
            "# Set java home to sym link which will be swapped out by the jdk manager".green()
        );
        println!(
            "{}",
            format!("export JAVA_HOME={}", self.config.storage.link_name).green()
        );
    }
}
