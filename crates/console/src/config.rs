use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use dealership_export::{DEFAULT_EXPORT_FILE, ExportFormat};
use dealership_observability::LogFormat;
use dealership_sales::DEFAULT_FLEET_SIZE;

/// How many times an operator may retry login or pick a fresh username.
pub const DEFAULT_AUTH_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Parser)]
#[command(name = "dealership")]
#[command(about = "Car dealership inventory and transaction tracker.")]
pub struct Args {
    /// Where the transaction ledger is written when the session ends
    #[arg(long, env = "DEALERSHIP_EXPORT_PATH", default_value = DEFAULT_EXPORT_FILE)]
    pub export_path: PathBuf,

    /// Export file format
    #[arg(long, env = "DEALERSHIP_EXPORT_FORMAT", value_enum, default_value_t = FormatArg::Xlsx)]
    pub format: FormatArg,

    /// Number of car units on the lot, numbered from 1
    #[arg(
        long,
        env = "DEALERSHIP_FLEET_SIZE",
        default_value_t = DEFAULT_FLEET_SIZE,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub fleet_size: u32,

    /// Login tries and sign-up username retries before giving up
    #[arg(
        long,
        env = "DEALERSHIP_AUTH_ATTEMPTS",
        default_value_t = DEFAULT_AUTH_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub auth_attempts: u32,

    /// Log line format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, env = "DEALERSHIP_LOG_FORMAT", value_enum, default_value_t = LogFormatArg::Compact)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Xlsx,
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Xlsx => ExportFormat::Xlsx,
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
