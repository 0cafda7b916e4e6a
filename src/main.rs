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

use clap::Parser;
use jdkswap::catalog::Catalog;
use jdkswap::commands::switch::SwitchCommand;
use jdkswap::config::JdkSwapConfig;
use jdkswap::error::{FAILURE_EXIT_CODE, Result, format_error_with_color};
use jdkswap::logging;
use jdkswap::selector::{InteractivePrompt, PresetPrompt, VersionPrompt};
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "jdkswap")]
#[command(author, version, about = "Download Amazon Corretto JDKs and switch between them")]
#[command(long_about = "Download Amazon Corretto JDKs and switch between them

Installs the chosen JDK under ./jdk-dump/<version> and points the ./jdk
symlink at its home directory. Without a VERSION argument an interactive
selection menu is shown.

Examples:
  jdkswap          # pick from the menu
  jdkswap 17       # switch to Corretto 17 directly")]
struct Cli {
    /// Version to switch to (e.g., "21", "17", "11", "8")
    #[arg(id = "target_version", value_name = "VERSION")]
    version: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable the download progress bar
    #[arg(long)]
    no_progress: bool,
}

fn run(cli: Cli) -> Result<()> {
    let config = JdkSwapConfig::load_from_current_dir()?;
    let catalog = Catalog::corretto(config.platform, &config.catalog.base_url)?;

    let mut prompt: Box<dyn VersionPrompt> = match cli.version {
        Some(version) => Box::new(PresetPrompt::new(version)),
        None => Box::new(InteractivePrompt::new()),
    };

    let command = SwitchCommand::new(&config, &catalog, cli.no_progress)?;
    command.execute(prompt.as_mut())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    logging::setup_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!(
            "{}",
            format_error_with_color(&e, std::io::stderr().is_terminal())
        );
        std::process::exit(FAILURE_EXIT_CODE);
    }
}
