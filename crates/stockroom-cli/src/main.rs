//! Stockroom CLI.

use std::io::{self, IsTerminal};

use chrono::Utc;
use clap::{ColorChoice, Parser};
use stockroom_cli::logging::{LogConfig, LogFormat, init_logging};
use stockroom_cli::settings::load_settings;
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_config, run_inventory, run_template, run_upload};
use crate::summary::{InventoryView, print_inventory, print_upload_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = load_settings(cli.settings.as_deref());
    let today = Utc::now().date_naive();
    let exit_code = match &cli.command {
        Command::Upload(args) => match run_upload(args, &settings) {
            Ok(run) => {
                let view = InventoryView {
                    today,
                    expiry_window_days: settings.inventory.expiry_window_days,
                    search: args.search.as_deref(),
                };
                print_upload_summary(&run, &view);
                if run.has_errors { 1 } else { 0 }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Template(args) => match run_template(args, &settings) {
            Ok(Some(path)) => {
                println!("Template written to {}", path.display());
                0
            }
            Ok(None) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Inventory(args) => match run_inventory(args, &settings) {
            Ok(inventory) => {
                let view = InventoryView {
                    today,
                    expiry_window_days: settings.inventory.expiry_window_days,
                    search: args.search.as_deref(),
                };
                print_inventory(&inventory, &view);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Config(args) => match run_config(args, &settings, cli.settings.as_deref()) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
