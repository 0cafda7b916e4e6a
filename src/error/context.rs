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

use crate::error::JdkSwapError;
use std::fmt;

pub struct ErrorContext<'a> {
    pub error: &'a JdkSwapError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a JdkSwapError) -> Self {
        let (suggestion, details) = match error {
            JdkSwapError::SelectionAborted(msg) => {
                let suggestion = Some(
                    "Run jdkswap from an interactive terminal, or pass the version directly \
                     (e.g., 'jdkswap 21')."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            JdkSwapError::VersionNotFound(label) => {
                let suggestion = Some(
                    "Run 'jdkswap' without arguments to pick from the available versions."
                        .to_string(),
                );
                let details = Some(format!("Version lookup failed for '{label}'"));
                (suggestion, details)
            }
            JdkSwapError::Download(msg) => {
                let suggestion = Some(
                    "Check your internet connection and try again. Set \
                     JDKSWAP_DOWNLOAD__TIMEOUT_SECS to increase the timeout if needed."
                        .to_string(),
                );
                let details = Some(format!("Download failed: {msg}"));
                (suggestion, details)
            }
            JdkSwapError::Extract(msg) => {
                let suggestion = Some(
                    "Ensure you have enough disk space, remove the partially extracted version \
                     directory and try again."
                        .to_string(),
                );
                let details = Some(format!("Extraction failed: {msg}"));
                (suggestion, details)
            }
            JdkSwapError::PermissionDenied(path) => {
                let suggestion = if cfg!(unix) {
                    Some(format!(
                        "Ensure you own the file and have write permissions to: {path}"
                    ))
                } else {
                    Some(format!(
                        "Run as Administrator or ensure you have write permissions to: {path}"
                    ))
                };
                let details = None;
                (suggestion, details)
            }
            JdkSwapError::Link(msg) => {
                let suggestion = Some(
                    "Ensure the working directory is writable and its filesystem supports \
                     symbolic links."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            JdkSwapError::UnsupportedPlatform(platform) => {
                let suggestion = Some(
                    "Supported platforms: macos-aarch64, macos-x64. Set JDKSWAP_PLATFORM__OS and \
                     JDKSWAP_PLATFORM__ARCH accordingly."
                        .to_string(),
                );
                let details = Some(format!("No JDK catalog is available for {platform}"));
                (suggestion, details)
            }
            JdkSwapError::ConfigError(msg) | JdkSwapError::InvalidConfig(msg) => {
                let suggestion = Some(
                    "Check jdkswap.toml in the working directory and any JDKSWAP_* environment \
                     variables."
                        .to_string(),
                );
                let details = Some(msg.clone());
                (suggestion, details)
            }
            JdkSwapError::Io(io_err) => {
                let suggestion = match io_err.kind() {
                    std::io::ErrorKind::PermissionDenied => {
                        Some("Check the permissions of the working directory.".to_string())
                    }
                    std::io::ErrorKind::NotFound => Some(
                        "Ensure the file or directory exists and the path is correct.".to_string(),
                    ),
                    _ => None,
                };
                let details = Some(format!("I/O error: {io_err}"));
                (suggestion, details)
            }
        };

        ErrorContext {
            error,
            suggestion,
            details,
        }
    }
}

impl<'a> fmt::Display for ErrorContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\n\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}
