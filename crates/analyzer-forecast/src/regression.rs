//! Ordinary least squares over an integer index.

/// Fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Fit values against their zero-based index.
///
/// Returns `None` for fewer than two points, where the slope is
/// undetermined.
pub fn fit_index(values: &[f64]) -> Option<LinearFit> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let n_f64 = n as f64;
    let sum_x = (n * (n - 1)) as f64 / 2.0;
    let sum_x2: f64 = (0..n).map(|i| (i * i) as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &y)| i as f64 * y)
        .sum();

    let denominator = n_f64 * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n_f64 * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n_f64;

    Some(LinearFit { slope, intercept })
}
