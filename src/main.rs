// printenvz-rs: Null-Delimited Environment Dump - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> run_dump_command()
//! ```

use std::process::ExitCode;

use printenvz_rs::cli;
use printenvz_rs::cli::global::GlobalOptions;
use printenvz_rs::cmd::dump::run_dump_command;
use printenvz_rs::config::Config;
use printenvz_rs::config::loader::ConfigLoader;
use printenvz_rs::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Operands in cli.operands are accepted but never inspected.
    match run_dump_command() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    // Later sources win, so the default file goes first and --ini overrides it.
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional("printenvz.toml");
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader
}

fn load_config(global: &GlobalOptions) -> printenvz_rs::error::Result<Config> {
    let mut loader = build_config_loader(global).with_env_prefix("PRINTENVZ");
    for (key, value) in global.to_config_overrides() {
        loader = loader.set(&key, value)?;
    }
    loader.build()
}
