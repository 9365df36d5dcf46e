//! Short-horizon price projection from a linear trend fit.
//!
//! The forecast fits ordinary least squares of close prices against a
//! zero-based day index over the rows where every rolling-window
//! indicator is defined, then extrapolates the fitted line onto future
//! business days. Too little usable history yields an empty path, a
//! deliberate soft fail callers use to suppress the projection overlay.

pub mod calendar;
pub mod regression;

use analyzer_core::error::{AnalyzerResult, InputError};
use analyzer_core::types::PriceSeries;
use analyzer_indicators::{compute_indicators, IndicatorParams, IndicatorSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use regression::{fit_index, LinearFit};

/// Default projection horizon in business days.
pub const DEFAULT_HORIZON: usize = 10;

/// Minimum fully-defined rows required before a projection is attempted.
pub const MIN_USABLE_ROWS: usize = 10;

/// One projected close on a future business day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Predicted closing price
    pub predicted_close: f64,
}

/// Projected path; empty when the series has too little usable history.
pub type ForecastPath = Vec<ForecastPoint>;

/// Compute a forecast from the series alone.
///
/// Indicators are computed with default parameters to decide which rows
/// are usable. Callers that already hold an [`IndicatorSet`] should use
/// [`compute_forecast_with`].
pub fn compute_forecast(series: &PriceSeries, horizon: usize) -> AnalyzerResult<ForecastPath> {
    let indicators = compute_indicators(series, IndicatorParams::default())?;
    Ok(compute_forecast_with(series, &indicators, horizon)?)
}

/// Compute a forecast from a series and its precomputed indicator set.
///
/// The path is a deterministic function of the cleaned input and the
/// horizon: no randomness, no state retained between calls. Future
/// timestamps continue the last observed timestamp over business days.
pub fn compute_forecast_with(
    series: &PriceSeries,
    indicators: &IndicatorSet,
    horizon: usize,
) -> Result<ForecastPath, InputError> {
    if indicators.len() != series.len() {
        return Err(InputError::LengthMismatch {
            series: series.len(),
            indicators: indicators.len(),
        });
    }

    let closes = series.closes();
    let usable: Vec<f64> = indicators
        .defined_rows()
        .into_iter()
        .map(|i| closes[i])
        .collect();

    if usable.len() < MIN_USABLE_ROWS {
        debug!(
            symbol = series.symbol(),
            usable = usable.len(),
            required = MIN_USABLE_ROWS,
            "too little usable history, suppressing projection"
        );
        return Ok(Vec::new());
    }

    let fit = match regression::fit_index(&usable) {
        Some(fit) => fit,
        None => return Ok(Vec::new()),
    };
    debug!(
        symbol = series.symbol(),
        slope = fit.slope,
        intercept = fit.intercept,
        horizon,
        "fitted trend line"
    );

    let path = calendar::business_days_after(series.last_timestamp(), horizon)
        .into_iter()
        .enumerate()
        .map(|(step, timestamp)| ForecastPoint {
            timestamp,
            predicted_close: fit.predict((usable.len() + step) as f64),
        })
        .collect();

    Ok(path)
}
