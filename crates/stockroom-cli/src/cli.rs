//! CLI argument definitions for the stockroom tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use stockroom_ingest::CsvSchema;

#[derive(Parser)]
#[command(
    name = "stockroom",
    version,
    about = "Stockroom - bulk upload products into the inventory list",
    long_about = "Bulk upload products from CSV files into the inventory list.\n\n\
                  Accepts the inventory layout (name, category, currentStock, ...) and the\n\
                  product registry layout (productId, productName, categoryName, ...)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include product values (names, ids) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file to use instead of the per-user default.
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload CSV files into the inventory list.
    Upload(UploadArgs),

    /// Write a CSV template for one of the upload layouts.
    Template(TemplateArgs),

    /// Show the inventory list and its overview counters.
    Inventory(InventoryArgs),

    /// Show the effective settings and session.
    Config(ConfigArgs),
}

#[derive(Parser)]
pub struct InventorySourceArgs {
    /// JSON file holding the current product list.
    #[arg(long = "inventory", value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Start from an empty list instead of the built-in sample products.
    #[arg(long = "no-fallback")]
    pub no_fallback: bool,
}

#[derive(Parser)]
pub struct UploadArgs {
    /// CSV files to upload, in order.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub source: InventorySourceArgs,

    /// Write the merged product list as JSON.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Only list products whose name, id or category contains TERM.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Layout to generate a template for.
    #[arg(long = "schema", value_enum)]
    pub schema: Option<SchemaArg>,

    /// Directory to write the template into (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the template instead of writing a file.
    #[arg(long = "stdout", conflicts_with = "output_dir")]
    pub stdout: bool,
}

#[derive(Parser)]
pub struct InventoryArgs {
    #[command(flatten)]
    pub source: InventorySourceArgs,

    /// Only list products whose name, id or category contains TERM.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Parser)]
pub struct ConfigArgs {
    /// Write a settings file with default values if none exists.
    #[arg(long = "write-defaults")]
    pub write_defaults: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    /// name, category, currentStock, ...
    Simple,
    /// productId, productName, categoryName, holdingCapacity, ...
    Extended,
}

impl From<SchemaArg> for CsvSchema {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Simple => CsvSchema::Simple,
            SchemaArg::Extended => CsvSchema::Extended,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
