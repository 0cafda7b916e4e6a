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

use super::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Download progress on stderr. Hidden automatically when stderr is not a terminal.
pub struct IndicatifProgressReporter {
    progress_bar: Option<ProgressBar>,
    draw_target: fn() -> ProgressDrawTarget,
}

impl IndicatifProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            draw_target: ProgressDrawTarget::stderr,
        }
    }

    #[cfg(test)]
    fn hidden() -> Self {
        Self {
            progress_bar: None,
            draw_target: ProgressDrawTarget::hidden,
        }
    }

    fn template(total_bytes: u64) -> &'static str {
        if total_bytes > 0 {
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] \
             {bytes}/{total_bytes} {msg} ({bytes_per_sec}, {eta})"
        } else {
            "{spinner:.green} [{elapsed_precise}] {bytes} {msg}"
        }
    }
}

impl Default for IndicatifProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for IndicatifProgressReporter {
    fn on_start(&mut self, total_bytes: u64) {
        let pb = if total_bytes > 0 {
            ProgressBar::with_draw_target(Some(total_bytes), (self.draw_target)())
        } else {
            ProgressBar::with_draw_target(None, (self.draw_target)())
        };

        if let Ok(style) = ProgressStyle::default_bar().template(Self::template(total_bytes)) {
            pb.set_style(
                style
                    .progress_chars("█▓░")
                    .tick_chars("⣾⣽⣻⢿⡿⣟⣯⣷"),
            );
        }
        pb.set_message("Downloading");
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    fn on_progress(&mut self, bytes_downloaded: u64) {
        if let Some(pb) = &self.progress_bar {
            pb.set_position(bytes_downloaded);
        }
    }

    fn on_complete(&mut self) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message("Download complete");
        }
    }

    fn on_error(&mut self, message: &str) {
        if let Some(pb) = self.progress_bar.take() {
            pb.abandon_with_message(format!("✗ {message}"));
        }
    }
}
