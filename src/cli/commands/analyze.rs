//! Analyze command implementation.

use analyzer_config::load_config;
use analyzer_core::types::Lookback;
use analyzer_core::MarketDataSource;
use analyzer_data::CsvDataSource;
use analyzer_forecast::{compute_forecast_with, MIN_USABLE_ROWS};
use analyzer_indicators::{compute_indicators, IndicatorParams};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::cli::AnalyzeArgs;
use crate::report::AnalysisReport;

pub fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    info!("Starting analysis for symbol: {}", args.symbol);

    let config = load_config(config_path)
        .with_context(|| format!("Failed to load configuration from {:?}", config_path))?;

    let lookback: Lookback = args
        .period
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    // Load data
    if !args.data.exists() {
        anyhow::bail!(
            "Data path '{}' does not exist. Provide a CSV file with OHLCV rows (e.g. --data ./data/reliance.csv)",
            args.data.display()
        );
    }
    let source = CsvDataSource::new(&args.data)?;
    let series = source
        .fetch(&args.symbol, lookback)
        .context("Failed to load price series")?;

    if series.len() < MIN_USABLE_ROWS {
        anyhow::bail!(
            "Not enough data to analyze ({} bars). Try selecting a longer period.",
            series.len()
        );
    }

    // Per-request parameters: config defaults, CLI overrides
    let defaults: IndicatorParams = config.indicators.into();
    let params = IndicatorParams {
        short_window: args.short_window.unwrap_or(defaults.short_window),
        long_window: args.long_window.unwrap_or(defaults.long_window),
        rsi_period: args.rsi_period.unwrap_or(defaults.rsi_period),
    };
    let horizon = args.horizon.unwrap_or(config.forecast.horizon);

    // Run the engine
    let indicators = compute_indicators(&series, params)?;
    let forecast = compute_forecast_with(&series, &indicators, horizon)?;
    if forecast.is_empty() {
        info!("Projection suppressed: too little usable history");
    }

    let report = AnalysisReport::new(
        &series,
        &indicators,
        forecast,
        lookback.to_string(),
        params,
        horizon,
    );

    // Output results
    match args.output.as_str() {
        "json" => {
            let json = report.to_json()?;
            println!("{}", json);
        }
        _ => {
            println!("{}", report.summary());
        }
    }

    // Save if requested
    if let Some(save_path) = &args.save {
        let json = report.to_json()?;
        std::fs::write(save_path, json)?;
        info!("Results saved to {:?}", save_path);
    }

    Ok(())
}
