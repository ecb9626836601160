//! CLI argument definitions for `inc-insights`.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "inc-insights",
    version,
    about = "Clean and explore the INC 5000 company list",
    long_about = "Clean and explore the INC 5000 company list.\n\n\
                  Parses revenue strings, imputes missing worker counts, drops rows\n\
                  without revenue or founding year, then prints summary statistics\n\
                  and renders SVG charts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean the table, print the report and render charts.
    Analyze(AnalyzeArgs),

    /// Clean the table and write it as CSV.
    Clean(CleanArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Company list CSV.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Directory for SVG charts (default: <CSV dir>/charts).
    #[arg(long = "chart-dir", value_name = "DIR")]
    pub chart_dir: Option<PathBuf>,

    /// Skip chart rendering.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Report format written to stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,

    /// Number of industries and states listed in the report.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Abort on the first revenue string that has a magnitude but no valid number.
    #[arg(long = "strict-revenue")]
    pub strict_revenue: bool,

    /// Also write the cleaned table to this CSV file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    /// Company list CSV.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output CSV file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Abort on the first revenue string that has a magnitude but no valid number.
    #[arg(long = "strict-revenue")]
    pub strict_revenue: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
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

impl Cli {
    /// Logging configuration with consistent precedence:
    /// `--log-level` beats `-v/-q`, and `RUST_LOG` applies only when neither is given.
    pub fn log_config(&self) -> LogConfig {
        let mut config = LogConfig {
            level_filter: self.verbosity.tracing_level_filter(),
            use_env_filter: !(self.verbosity.is_present() || self.log_level.is_some()),
            ..LogConfig::default()
        };
        if let Some(level) = self.log_level {
            config.level_filter = match level {
                LogLevelArg::Error => LevelFilter::ERROR,
                LogLevelArg::Warn => LevelFilter::WARN,
                LogLevelArg::Info => LevelFilter::INFO,
                LogLevelArg::Debug => LevelFilter::DEBUG,
                LogLevelArg::Trace => LevelFilter::TRACE,
            };
        }
        config.format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        config.log_file.clone_from(&self.log_file);
        config.with_timestamps = self.log_timestamps;
        config.with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        config
    }
}
