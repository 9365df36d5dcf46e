//! Configuration structures.

use analyzer_forecast::DEFAULT_HORIZON;
use analyzer_indicators::IndicatorParams;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub indicators: IndicatorSettings,
    #[serde(default)]
    pub forecast: ForecastSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-analyzer".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Rolling-window settings for the indicator engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSettings {
    pub short_window: usize,
    pub long_window: usize,
    pub rsi_period: usize,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        let defaults = IndicatorParams::default();
        Self {
            short_window: defaults.short_window,
            long_window: defaults.long_window,
            rsi_period: defaults.rsi_period,
        }
    }
}

impl From<IndicatorSettings> for IndicatorParams {
    fn from(settings: IndicatorSettings) -> Self {
        Self {
            short_window: settings.short_window,
            long_window: settings.long_window,
            rsi_period: settings.rsi_period,
        }
    }
}

/// Forecast settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSettings {
    pub horizon: usize,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            horizon: DEFAULT_HORIZON,
        }
    }
}
