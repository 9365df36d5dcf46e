//! Momentum indicators.

use analyzer_core::traits::{Indicator, MultiOutputIndicator};
use serde::{Deserialize, Serialize};

use crate::moving_average::{Ema, Sma};

/// Relative Strength Index (RSI), bounded to `[0, 100]`.
///
/// Splits per-step price changes into gains and losses, takes the
/// trailing rolling mean of each over the period, and maps the ratio
/// into the bounded oscillator.
///
/// Boundary policy: a window with zero average loss but positive average
/// gain saturates at exactly `100.0`; a flat window (zero gain and zero
/// loss) is undefined and yields `None`. Neither case is an error.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Rsi {
    type Output = Option<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        if data.is_empty() {
            return vec![];
        }

        let mut gains = Vec::with_capacity(data.len());
        let mut losses = Vec::with_capacity(data.len());

        // The first row has no preceding close; it contributes zero
        // gain and zero loss so the output stays aligned.
        gains.push(0.0);
        losses.push(0.0);

        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            if change > 0.0 {
                gains.push(change);
                losses.push(0.0);
            } else {
                gains.push(0.0);
                losses.push(-change);
            }
        }

        let window = Sma::new(self.period);
        let avg_gains = window.calculate(&gains);
        let avg_losses = window.calculate(&losses);

        avg_gains
            .iter()
            .zip(avg_losses.iter())
            .map(|(&gain, &loss)| match (gain, loss) {
                (Some(avg_gain), Some(avg_loss)) => {
                    if avg_loss == 0.0 {
                        if avg_gain == 0.0 {
                            None
                        } else {
                            Some(100.0)
                        }
                    } else {
                        Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
                    }
                }
                _ => None,
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// One MACD entry: the crossover line and its smoothed signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of the MACD line)
    pub signal: f64,
}

/// MACD (Moving Average Convergence Divergence).
///
/// Difference of two recursively seeded EMAs, paired with an EMA of that
/// difference. Because the EMAs are seeded by the first observation, the
/// output is defined at every index.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
}

impl Macd {
    /// Create a new MACD with the conventional spans (12, 26, 9).
    pub fn new() -> Self {
        Self::with_spans(12, 26, 9)
    }

    /// Create a MACD with custom spans.
    pub fn with_spans(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal > 0);
        assert!(fast < slow, "Fast span must be less than slow span");
        Self {
            fast_span: fast,
            slow_span: slow,
            signal_span: signal,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdPoint;

    fn calculate(&self, data: &[f64]) -> Vec<MacdPoint> {
        let fast = Ema::new(self.fast_span).calculate(data);
        let slow = Ema::new(self.slow_span).calculate(data);

        let macd_line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        let signal_line = Ema::new(self.signal_span).calculate(&macd_line);

        macd_line
            .iter()
            .zip(signal_line.iter())
            .map(|(&macd, &signal)| MacdPoint { macd, signal })
            .collect()
    }

    fn period(&self) -> usize {
        1
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_bounds() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..60)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data);
        assert_eq!(result.len(), data.len());
        assert!(result[..13].iter().all(Option::is_none));
        assert!(result[13].is_some());

        for value in result.iter().flatten() {
            assert!(*value >= 0.0 && *value <= 100.0);
        }
    }

    #[test]
    fn test_rsi_all_gains_saturates_at_100() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.calculate(&data);

        assert_eq!(result.len(), 7);
        for value in result[4..].iter() {
            assert_eq!(*value, Some(100.0));
        }
    }

    #[test]
    fn test_rsi_all_losses_is_zero() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        for value in result[4..].iter() {
            assert!(value.unwrap().abs() < 1e-10);
        }
    }

    #[test]
    fn test_rsi_flat_window_undefined() {
        let rsi = Rsi::new(3);
        let data = vec![5.0; 10];
        let result = rsi.calculate(&data);

        assert_eq!(result, vec![None; 10]);
    }

    #[test]
    fn test_rsi_balanced_moves() {
        // Equal average gain and loss inside the window => RSI 50
        let rsi = Rsi::new(2);
        let data = vec![100.0, 101.0, 100.0, 101.0, 100.0];
        let result = rsi.calculate(&data);

        for value in result[2..].iter() {
            assert!((value.unwrap() - 50.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_macd_alignment_and_trend() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = macd.calculate(&data);

        assert_eq!(result.len(), data.len());
        // Seeded EMAs agree at the first point
        assert!(result[0].macd.abs() < 1e-10);
        // In an uptrend the fast EMA leads, so MACD ends positive
        assert!(result.last().unwrap().macd > 0.0);
    }

    #[test]
    fn test_macd_recomputation_is_bit_identical() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..100)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 8.0)
            .collect();

        let first = macd.calculate(&data);
        let second = macd.calculate(&data);

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.macd.to_bits(), b.macd.to_bits());
            assert_eq!(a.signal.to_bits(), b.signal.to_bits());
        }
    }

    #[test]
    fn test_macd_custom_spans() {
        let macd = Macd::with_spans(5, 10, 3);
        let data: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let result = macd.calculate(&data);

        assert_eq!(result.len(), data.len());
    }
}
