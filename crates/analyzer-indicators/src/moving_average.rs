//! Moving average indicators.

use analyzer_core::traits::Indicator;

/// Simple Moving Average (SMA).
///
/// Arithmetic mean of the trailing N values. Output is aligned to the
/// input; the first `period - 1` entries are `None`.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = Option<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        let mut result = Vec::with_capacity(data.len());
        let period_f64 = self.period as f64;
        let mut sum = 0.0;

        // Sliding window over the trailing `period` values
        for (i, &value) in data.iter().enumerate() {
            sum += value;
            if i >= self.period {
                sum -= data[i - self.period];
            }
            if i + 1 >= self.period {
                result.push(Some(sum / period_f64));
            } else {
                result.push(None);
            }
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA) with recursive smoothing.
///
/// `alpha = 2 / (span + 1)`, seeded by the first observed value with no
/// bias adjustment, so the output is defined at every index.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    alpha: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Self {
        assert!(span > 0, "Span must be greater than 0");
        let alpha = 2.0 / (span as f64 + 1.0);
        Self { span, alpha }
    }

    /// The span this EMA was built with.
    pub fn span(&self) -> usize {
        self.span
    }

    /// The smoothing factor in use.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        let mut ema = match data.first() {
            Some(&first) => first,
            None => return vec![],
        };

        let mut result = Vec::with_capacity(data.len());
        result.push(ema);

        let one_minus_alpha = 1.0 - self.alpha;
        for &value in &data[1..] {
            ema = value * self.alpha + ema * one_minus_alpha;
            result.push(ema);
        }

        result
    }

    fn period(&self) -> usize {
        // Seeded by the first value, so one point suffices.
        1
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_alignment() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 5);
        assert_eq!(&result[..2], &[None, None]);
        assert!((result[2].unwrap() - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[3].unwrap() - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[4].unwrap() - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5);
        let data = vec![1.0, 2.0, 3.0];
        let result = sma.calculate(&data);

        assert_eq!(result, vec![None, None, None]);
    }

    #[test]
    fn test_sma_window_of_one() {
        let sma = Sma::new(1);
        let data = vec![4.0, 5.0, 6.0];
        let result = sma.calculate(&data);

        assert_eq!(result, vec![Some(4.0), Some(5.0), Some(6.0)]);
    }

    #[test]
    fn test_ema_recursive_seeding() {
        // span 3 => alpha = 0.5; seeded by the first value
        let ema = Ema::new(3);
        let data = vec![1.0, 2.0, 3.0];
        let result = ema.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 1.0).abs() < 1e-10);
        assert!((result[1] - 1.5).abs() < 1e-10); // 2*0.5 + 1*0.5
        assert!((result[2] - 2.25).abs() < 1e-10); // 3*0.5 + 1.5*0.5
    }

    #[test]
    fn test_ema_empty_input() {
        let ema = Ema::new(12);
        assert!(ema.calculate(&[]).is_empty());
    }

    #[test]
    fn test_ema_constant_series_is_flat() {
        let ema = Ema::new(12);
        let data = vec![42.0; 50];
        let result = ema.calculate(&data);

        assert!(result.iter().all(|&v| (v - 42.0).abs() < 1e-10));
    }
}
