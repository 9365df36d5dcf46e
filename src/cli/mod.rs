//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "analyzer")]
#[command(author, version, about = "Stock indicator and trend-projection analyzer")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators and a trend projection for a symbol
    Analyze(AnalyzeArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Symbol to analyze
    #[arg(short, long)]
    pub symbol: String,

    /// Data file (CSV with date,open,high,low,close,volume)
    #[arg(long)]
    pub data: PathBuf,

    /// Lookback period (1mo, 3mo, 6mo, 1y, 2y, 5y)
    #[arg(short, long, default_value = "6mo")]
    pub period: String,

    /// Short SMA window (overrides config)
    #[arg(long)]
    pub short_window: Option<usize>,

    /// Long SMA window (overrides config)
    #[arg(long)]
    pub long_window: Option<usize>,

    /// RSI period (overrides config)
    #[arg(long)]
    pub rsi_period: Option<usize>,

    /// Forecast horizon in business days (overrides config)
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save results to file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
