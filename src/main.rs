// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod cli;
mod logic;
mod models;
mod mvu;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use log::LevelFilter;

use crate::cli::Cli;
use crate::models::extraction::ExtractionResult;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match cli.headless_paths() {
        Some((input, output)) => run_headless(input, output, cli.json),
        None => {
            app::run().map_err(|err| anyhow!("Failed to start the desktop window: {err}"))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// `RUST_LOG` takes precedence over the level chosen on the command line.
fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run_headless(input: &Path, output: &Path, json: bool) -> anyhow::Result<ExitCode> {
    let result = logic::consolidate(input, output);
    let report = render_result(&result, json)?;
    if result.is_success() {
        println!("{report}");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{report}");
        Ok(ExitCode::FAILURE)
    }
}

fn render_result(result: &ExtractionResult, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.message.clone())
    }
}
