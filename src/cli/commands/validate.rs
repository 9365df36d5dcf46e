//! Validate configuration command.

use analyzer_config::load_config;
use anyhow::Result;
use std::path::Path;

pub fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Short SMA window: {}", config.indicators.short_window);
            println!("Long SMA window: {}", config.indicators.long_window);
            println!("RSI period: {}", config.indicators.rsi_period);
            println!("Forecast horizon: {}", config.forecast.horizon);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
