//! Market data sources for the analyzer.

mod csv_source;

pub use csv_source::CsvDataSource;

use analyzer_core::error::DataError;
use analyzer_core::types::{Lookback, PriceSeries};
use analyzer_core::MarketDataSource;
use std::path::Path;

/// Load a price series from a CSV file over the given lookback window.
pub fn load_csv(
    path: &Path,
    symbol: &str,
    lookback: Lookback,
) -> Result<PriceSeries, DataError> {
    let source = CsvDataSource::new(path)?;
    source.fetch(symbol, lookback)
}
