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

mod context;
mod format;

pub use context::ErrorContext;
pub use format::{format_error_chain, format_error_with_color};

use thiserror::Error;

/// Process exit status for any failed run.
pub const FAILURE_EXIT_CODE: i32 = 1;

#[derive(Error, Debug)]
pub enum JdkSwapError {
    #[error("Version selection aborted: {0}")]
    SelectionAborted(String),

    #[error("JDK version '{0}' is not in the catalog")]
    VersionNotFound(String),

    #[error("Failed to download JDK: {0}")]
    Download(String),

    #[error("Failed to extract archive: {0}")]
    Extract(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Failed to publish symlink: {0}")]
    Link(String),

    #[error("Platform '{0}' is not supported")]
    UnsupportedPlatform(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, JdkSwapError>;
