//! OHLCV (Open, High, Low, Close, Volume) data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Compact OHLCV bar.
/// Uses f64 for fast indicator calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Bar {
    /// Unix timestamp in milliseconds
    pub timestamp: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(timestamp: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Calculate the typical price (HLC average).
    #[inline]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Calculate the bar's range (high - low).
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Check if the bar is bullish (close > open).
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Get the timestamp as a DateTime.
    pub fn datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.timestamp)
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }
}

/// Validated, immutable price series.
///
/// Construction enforces the input contract of the indicator engine:
/// non-empty, strictly increasing timestamps, no duplicates. Once built,
/// the series is never mutated; every computation returns a fresh result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Symbol identifier
    symbol: String,
    /// Bars in chronological order
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Build a series from chronologically ordered bars.
    ///
    /// Fails with [`InputError`] when the input is empty or the
    /// timestamps are not strictly increasing.
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Result<Self, InputError> {
        if bars.is_empty() {
            return Err(InputError::EmptySeries);
        }
        for i in 1..bars.len() {
            if bars[i].timestamp == bars[i - 1].timestamp {
                return Err(InputError::DuplicateTimestamp { index: i });
            }
            if bars[i].timestamp < bars[i - 1].timestamp {
                return Err(InputError::OutOfOrder { index: i });
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// Symbol this series belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of bars (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Present for API completeness; a constructed series is never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Last bar. The non-empty invariant makes the index safe.
    pub fn last(&self) -> &Bar {
        &self.bars[self.bars.len() - 1]
    }

    /// Timestamp of the last bar, in milliseconds.
    pub fn last_timestamp(&self) -> i64 {
        self.last().timestamp
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract timestamps as a vector.
    pub fn timestamps(&self) -> Vec<i64> {
        self.bars.iter().map(|b| b.timestamp).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(ts: i64, close: f64) -> Bar {
        Bar::new(ts, close, close + 1.0, close - 1.0, close, 1000.0)
    }

    #[test]
    fn test_bar_calculations() {
        let b = Bar::new(1000, 100.0, 110.0, 95.0, 105.0, 1_000_000.0);

        assert!((b.typical_price() - 103.333333).abs() < 0.001);
        assert!((b.range() - 15.0).abs() < 0.001);
        assert!(b.is_bullish());
    }

    #[test]
    fn test_series_rejects_empty() {
        assert_eq!(
            PriceSeries::new("AAPL", vec![]).unwrap_err(),
            InputError::EmptySeries
        );
    }

    #[test]
    fn test_series_rejects_out_of_order() {
        let bars = vec![bar(2, 100.0), bar(1, 101.0)];
        assert_eq!(
            PriceSeries::new("AAPL", bars).unwrap_err(),
            InputError::OutOfOrder { index: 1 }
        );
    }

    #[test]
    fn test_series_rejects_duplicates() {
        let bars = vec![bar(1, 100.0), bar(1, 101.0)];
        assert_eq!(
            PriceSeries::new("AAPL", bars).unwrap_err(),
            InputError::DuplicateTimestamp { index: 1 }
        );
    }

    #[test]
    fn test_series_extractions() {
        let series =
            PriceSeries::new("AAPL", vec![bar(1, 100.5), bar(2, 101.5)]).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.timestamps(), vec![1, 2]);
        assert_eq!(series.last_timestamp(), 2);
    }
}
