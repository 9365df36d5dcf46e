//! Market data source trait.

use crate::error::DataError;
use crate::types::{Lookback, PriceSeries};

/// Trait for collaborators that supply historical price series.
///
/// The lookback selector is passed through unchanged; the source decides
/// how to interpret it.
pub trait MarketDataSource: Send + Sync {
    /// Fetch a validated price series for the symbol over the lookback window.
    fn fetch(&self, symbol: &str, lookback: Lookback) -> Result<PriceSeries, DataError>;
}
