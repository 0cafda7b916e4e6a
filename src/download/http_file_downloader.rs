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

use crate::download::client::{HttpClient, HttpResponse};
use crate::error::{JdkSwapError, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

const DOWNLOAD_CHUNK_SIZE: usize = 8192;

pub trait ProgressReporter: Send + Sync {
    fn on_start(&mut self, total_bytes: u64);

    fn on_progress(&mut self, bytes_downloaded: u64);

    fn on_complete(&mut self);

    fn on_error(&mut self, _message: &str) {}
}

pub struct HttpFileDownloader {
    http_client: Box<dyn HttpClient>,
    progress_reporter: Option<Box<dyn ProgressReporter>>,
}

impl HttpFileDownloader {
    pub fn with_client(http_client: Box<dyn HttpClient>) -> Self {
        Self {
            http_client,
            progress_reporter: None,
        }
    }

    pub fn with_progress_reporter(mut self, reporter: Box<dyn ProgressReporter>) -> Self {
        self.progress_reporter = Some(reporter);
        self
    }

    /// Stream `url` into `destination`, returning the number of bytes written.
    ///
    /// The destination is created (or truncated) before the request is sent.
    /// On failure it is left as is, possibly empty or partially written.
    pub fn download(&mut self, url: &str, destination: &Path) -> Result<u64> {
        let file = File::create(destination).map_err(|e| {
            JdkSwapError::Download(format!(
                "Cannot create {}: {e}",
                destination.display()
            ))
        })?;

        log::debug!("GET {url}");
        let response = self.http_client.get(url)?;

        let status = response.status();
        if status != 200 {
            return Err(JdkSwapError::Download(format!(
                "HTTP request failed with status code {status}"
            )));
        }

        let total_size = response
            .header("Content-Length")
            .and_then(|length| length.parse::<u64>().ok())
            .unwrap_or(0);

        if let Some(reporter) = &mut self.progress_reporter {
            reporter.on_start(total_size);
        }

        let result = self.copy_to_file(response, file);

        if let Some(reporter) = &mut self.progress_reporter {
            match &result {
                Ok(_) => reporter.on_complete(),
                Err(e) => reporter.on_error(&e.to_string()),
            }
        }

        let written = result?;
        log::info!("Downloaded {written} bytes to {}", destination.display());
        Ok(written)
    }

    fn copy_to_file(&mut self, mut response: Box<dyn HttpResponse>, file: File) -> Result<u64> {
        let mut writer = BufWriter::new(file);
        let mut downloaded = 0u64;
        let mut buffer = vec![0; DOWNLOAD_CHUNK_SIZE];

        loop {
            match response.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    writer.write_all(&buffer[..n]).map_err(|e| {
                        JdkSwapError::Download(format!("Failed to write archive: {e}"))
                    })?;
                    downloaded += n as u64;

                    if let Some(reporter) = &mut self.progress_reporter {
                        reporter.on_progress(downloaded);
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(JdkSwapError::Download(format!(
                        "Failed to read response body: {e}"
                    )));
                }
            }
        }

        writer
            .flush()
            .map_err(|e| JdkSwapError::Download(format!("Failed to write archive: {e}")))?;
        Ok(downloaded)
    }
}

#[cfg(test)]
#[path = "http_file_downloader_tests.rs"]
mod http_file_downloader_tests;
