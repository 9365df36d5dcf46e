//! Indicator engine: one pure pass over a price series.

use analyzer_core::error::IndicatorError;
use analyzer_core::traits::{Indicator, MultiOutputIndicator};
use analyzer_core::types::PriceSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::momentum::{Macd, Rsi};
use crate::moving_average::Sma;

/// Rolling-window parameters for one engine invocation.
///
/// Selection state lives here, per call, never in process-wide mutable
/// variables. MACD spans are fixed at the conventional 12/26/9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    /// Short SMA window (trend line)
    pub short_window: usize,
    /// Long SMA window (trend line)
    pub long_window: usize,
    /// RSI rolling-mean period
    pub rsi_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            short_window: 20,
            long_window: 50,
            rsi_period: 14,
        }
    }
}

impl IndicatorParams {
    /// Clamp every window to the series length so short histories
    /// degrade into more leading `None` entries instead of failing.
    pub fn clamped_to(self, len: usize) -> Self {
        Self {
            short_window: self.short_window.min(len),
            long_window: self.long_window.min(len),
            rsi_period: self.rsi_period.min(len),
        }
    }
}

/// Derived series aligned one-to-one with the input bars.
///
/// `sma_*` and `rsi` carry `None` wherever their rolling window has
/// insufficient history; the recursively seeded MACD pair is defined at
/// every index. Computed fresh on every invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma_short: Vec<Option<f64>>,
    pub sma_long: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd_line: Vec<f64>,
    pub signal_line: Vec<f64>,
}

impl IndicatorSet {
    /// Number of entries, equal to the length of the source series.
    #[inline]
    pub fn len(&self) -> usize {
        self.macd_line.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }

    /// Indices where every rolling-window indicator is defined.
    ///
    /// These are the rows usable for trend fitting; the MACD pair never
    /// disqualifies a row.
    pub fn defined_rows(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&i| {
                self.sma_short[i].is_some() && self.sma_long[i].is_some() && self.rsi[i].is_some()
            })
            .collect()
    }
}

/// Compute the full indicator set for a validated price series.
///
/// Pure function: the input is only read, the result is a fresh value.
/// Windows are clamped to the series length; zero windows are rejected.
pub fn compute_indicators(
    series: &PriceSeries,
    params: IndicatorParams,
) -> Result<IndicatorSet, IndicatorError> {
    if params.short_window == 0 || params.long_window == 0 || params.rsi_period == 0 {
        return Err(IndicatorError::InvalidParameter(
            "windows must be positive".to_string(),
        ));
    }

    let closes = series.closes();
    let params = params.clamped_to(closes.len());
    debug!(
        symbol = series.symbol(),
        len = closes.len(),
        ?params,
        "computing indicator set"
    );

    let sma_short = Sma::new(params.short_window).calculate(&closes);
    let sma_long = Sma::new(params.long_window).calculate(&closes);
    let rsi = Rsi::new(params.rsi_period).calculate(&closes);

    let macd_points = Macd::new().calculate(&closes);
    let (macd_line, signal_line): (Vec<f64>, Vec<f64>) =
        macd_points.iter().map(|p| (p.macd, p.signal)).unzip();

    Ok(IndicatorSet {
        sma_short,
        sma_long,
        rsi,
        macd_line,
        signal_line,
    })
}
