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

use crate::catalog::{Catalog, JdkEntry};
use crate::error::{JdkSwapError, Result};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

pub const PROMPT_LABEL: &str = "Select Version";

/// Capability to ask the user for one of the offered version labels.
pub trait VersionPrompt {
    /// Present `labels` in order and return the chosen one.
    ///
    /// Cancellation and prompt failures are reported as
    /// [`JdkSwapError::SelectionAborted`].
    fn present(&mut self, labels: &[&str]) -> Result<String>;
}

/// Arrow-key single choice prompt on the terminal.
pub struct InteractivePrompt {
    label: String,
}

impl InteractivePrompt {
    pub fn new() -> Self {
        Self {
            label: PROMPT_LABEL.to_string(),
        }
    }
}

impl Default for InteractivePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionPrompt for InteractivePrompt {
    fn present(&mut self, labels: &[&str]) -> Result<String> {
        if labels.is_empty() {
            return Err(JdkSwapError::SelectionAborted(
                "No versions to choose from".to_string(),
            ));
        }

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.label)
            .items(labels)
            .default(0)
            .interact_opt()
            .map_err(|e| JdkSwapError::SelectionAborted(format!("Prompt failed: {e}")))?;

        match selection {
            Some(index) => Ok(labels[index].to_string()),
            None => Err(JdkSwapError::SelectionAborted(
                "Selection cancelled by user".to_string(),
            )),
        }
    }
}

/// Answers with a label chosen ahead of time, e.g. from the command line.
pub struct PresetPrompt {
    answer: String,
}

impl PresetPrompt {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

impl VersionPrompt for PresetPrompt {
    fn present(&mut self, labels: &[&str]) -> Result<String> {
        log::debug!(
            "Using preset version '{}' (offered: {})",
            self.answer,
            labels.join(", ")
        );
        Ok(self.answer.clone())
    }
}

/// Ask `prompt` for a version and resolve it against `catalog`.
pub fn select<'c>(catalog: &'c Catalog, prompt: &mut dyn VersionPrompt) -> Result<&'c JdkEntry> {
    let labels = catalog.labels();
    let chosen = prompt.present(&labels)?;
    log::info!("Selected JDK {chosen}");
    catalog.lookup(&chosen)
}
