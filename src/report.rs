//! Analysis report assembly for rendering collaborators.

use analyzer_core::types::PriceSeries;
use analyzer_forecast::ForecastPath;
use analyzer_indicators::{IndicatorParams, IndicatorSet};
use chrono::DateTime;
use serde::Serialize;

/// One aligned output row, keyed by the source bar's timestamp.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndicatorRow {
    pub timestamp: i64,
    pub close: f64,
    pub sma_short: Option<f64>,
    pub sma_long: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: f64,
    pub signal: f64,
}

/// Complete analysis report: the three chart tracks plus the projection.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub period: String,
    pub params: IndicatorParams,
    pub horizon: usize,
    pub rows: Vec<IndicatorRow>,
    pub forecast: ForecastPath,
}

impl AnalysisReport {
    /// Assemble a report from the engine outputs.
    pub fn new(
        series: &PriceSeries,
        indicators: &IndicatorSet,
        forecast: ForecastPath,
        period: String,
        params: IndicatorParams,
        horizon: usize,
    ) -> Self {
        let rows = series
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                timestamp: bar.timestamp,
                close: bar.close,
                sma_short: indicators.sma_short[i],
                sma_long: indicators.sma_long[i],
                rsi: indicators.rsi[i],
                macd: indicators.macd_line[i],
                signal: indicators.signal_line[i],
            })
            .collect();

        Self {
            symbol: series.symbol().to_string(),
            period,
            params,
            horizon,
            rows,
            forecast,
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!(
            "  ANALYSIS: {} ({})\n",
            self.symbol, self.period
        ));
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("LATEST VALUES\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        if let Some(last) = self.rows.last() {
            s.push_str(&format!("  Date:                {}\n", format_date(last.timestamp)));
            s.push_str(&format!("  Close:               {:.2}\n", last.close));
            s.push_str(&format!(
                "  SMA {:<3}:             {}\n",
                self.params.short_window,
                format_optional(last.sma_short)
            ));
            s.push_str(&format!(
                "  SMA {:<3}:             {}\n",
                self.params.long_window,
                format_optional(last.sma_long)
            ));
            s.push_str(&format!(
                "  RSI {:<3}:             {}{}\n",
                self.params.rsi_period,
                format_optional(last.rsi),
                rsi_zone(last.rsi)
            ));
            s.push_str(&format!("  MACD:                {:.4}\n", last.macd));
            s.push_str(&format!("  Signal:              {:.4}\n", last.signal));
        }
        s.push('\n');

        s.push_str(&format!("FORECAST ({} business days)\n", self.horizon));
        s.push_str("───────────────────────────────────────────────────────────\n");
        if self.forecast.is_empty() {
            s.push_str("  Not enough usable history for a projection.\n");
        } else {
            for point in &self.forecast {
                s.push_str(&format!(
                    "  {}          {:.2}\n",
                    format_date(point.timestamp),
                    point.predicted_close
                ));
            }
        }
        s.push('\n');

        s.push_str("EXECUTION\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!("  Bars Processed:      {}\n", self.rows.len()));
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn format_date(timestamp_ms: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp_ms) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => timestamp_ms.to_string(),
    }
}

fn format_optional(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

fn rsi_zone(rsi: Option<f64>) -> &'static str {
    match rsi {
        Some(v) if v >= 70.0 => "  (overbought)",
        Some(v) if v <= 30.0 => "  (oversold)",
        _ => "",
    }
}
