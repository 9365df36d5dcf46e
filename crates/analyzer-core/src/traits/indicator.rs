//! Indicator trait definitions.

use crate::error::IndicatorError;

/// Trait for technical indicators aligned to their input.
///
/// Implementations return exactly one output entry per input value, so
/// callers can key results by the timestamps of the source series. An
/// output of `Option<f64>` marks entries where a rolling window has
/// insufficient history.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically close prices)
    ///
    /// # Returns
    /// A vector with one entry per input value
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the minimum data points required for a defined output.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate that there's enough data for at least one defined value.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        if data.len() < self.period() {
            return Err(IndicatorError::InsufficientData {
                required: self.period(),
                available: data.len(),
            });
        }
        Ok(())
    }
}

/// Multi-output indicator (e.g., MACD with its signal line).
///
/// Some indicators produce multiple related values per input entry.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs;

    /// Calculate indicator values for the given data, one per input value.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Outputs>;

    /// Get the minimum data points required for a defined output.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        period: usize,
    }

    impl Indicator for TestIndicator {
        type Output = Option<f64>;

        fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
            // Trailing-window sum for testing
            (0..data.len())
                .map(|i| {
                    if i + 1 >= self.period {
                        Some(data[i + 1 - self.period..=i].iter().sum())
                    } else {
                        None
                    }
                })
                .collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_indicator_validation() {
        let indicator = TestIndicator { period: 5 };

        assert!(indicator.validate_data(&[1.0, 2.0, 3.0]).is_err());
        assert!(indicator.validate_data(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_ok());
    }

    #[test]
    fn test_indicator_alignment() {
        let indicator = TestIndicator { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data);

        assert_eq!(result.len(), data.len());
        assert_eq!(&result[..2], &[None, None]);
        assert!((result[2].unwrap() - 6.0).abs() < 0.001); // 1+2+3
        assert!((result[4].unwrap() - 12.0).abs() < 0.001); // 3+4+5
    }
}
