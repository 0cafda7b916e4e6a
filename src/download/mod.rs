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

/// Download of JDK archives.
///
/// A single blocking GET streamed straight into the destination file, with
/// optional progress reporting. There is no resume, retry or checksum step.
mod client;
mod http_file_downloader;
mod progress;

pub use client::{AttohttpcClient, DEFAULT_TIMEOUT, HttpClient, HttpResponse};
pub use http_file_downloader::{HttpFileDownloader, ProgressReporter};
pub use progress::IndicatifProgressReporter;

use crate::error::Result;
use std::path::Path;
use std::time::Duration;

/// Download `url` into `destination`, returning the number of bytes written.
///
/// # Arguments
/// * `url` - Archive URL
/// * `destination` - File to create or truncate
/// * `timeout` - Connect and idle-read timeout
/// * `no_progress` - Disable the progress bar
pub fn download(url: &str, destination: &Path, timeout: Duration, no_progress: bool) -> Result<u64> {
    let mut client = AttohttpcClient::new();
    client.set_timeout(timeout);

    let mut downloader = HttpFileDownloader::with_client(Box::new(client));
    if !no_progress {
        downloader = downloader.with_progress_reporter(Box::new(IndicatifProgressReporter::new()));
    }

    downloader.download(url, destination)
}
