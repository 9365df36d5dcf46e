//! CSV-backed market data source.

use analyzer_core::error::DataError;
use analyzer_core::traits::MarketDataSource;
use analyzer_core::types::{Bar, Lookback, PriceSeries};
use chrono::{NaiveDate, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// CSV record format.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open")]
    open: f64,
    #[serde(alias = "High", alias = "high")]
    high: f64,
    #[serde(alias = "Low", alias = "low")]
    low: f64,
    #[serde(alias = "Close", alias = "close", alias = "Adj Close")]
    close: f64,
    #[serde(alias = "Volume", alias = "volume", default)]
    volume: f64,
}

/// Market data source reading historical bars from a CSV file.
///
/// The lookback selector is interpreted as a trailing calendar window
/// ending at the newest bar in the file.
pub struct CsvDataSource {
    path: PathBuf,
}

impl CsvDataSource {
    /// Create a new CSV data source.
    pub fn new(path: &Path) -> Result<Self, DataError> {
        if !path.exists() {
            return Err(DataError::NoDataAvailable);
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    fn load_bars(&self) -> Result<Vec<Bar>, DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let mut bars = Vec::new();

        for result in reader.deserialize() {
            let record: CsvRecord = result.map_err(|e| DataError::ParseError(e.to_string()))?;

            let timestamp = parse_timestamp(&record.date)?;

            bars.push(Bar::new(
                timestamp,
                record.open,
                record.high,
                record.low,
                record.close,
                record.volume,
            ));
        }

        // Sort by timestamp
        bars.sort_by_key(|b| b.timestamp);

        Ok(bars)
    }
}

impl MarketDataSource for CsvDataSource {
    fn fetch(&self, symbol: &str, lookback: Lookback) -> Result<PriceSeries, DataError> {
        let mut bars = self.load_bars()?;
        let Some(last) = bars.last() else {
            return Err(DataError::NoDataAvailable);
        };

        // Trim to the trailing window the selector denotes.
        let cutoff = last.timestamp - lookback.approx_days() * 86_400_000;
        bars.retain(|b| b.timestamp >= cutoff);

        info!(
            symbol,
            %lookback,
            bars = bars.len(),
            "loaded price series from CSV"
        );
        Ok(PriceSeries::new(symbol, bars)?)
    }
}

/// Parse various timestamp formats into Unix milliseconds.
fn parse_timestamp(date_str: &str) -> Result<i64, DataError> {
    let formats = [
        "%Y-%m-%d",
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%m-%Y",
    ];

    for format in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc().timestamp_millis());
        }
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            let dt = d.and_hms_opt(0, 0, 0).unwrap();
            return Ok(dt.and_utc().timestamp_millis());
        }
    }

    // Try parsing as a Unix timestamp; assume milliseconds if > 10 digits
    if let Ok(ts) = date_str.parse::<i64>() {
        if ts > 10_000_000_000 {
            return Ok(ts);
        } else {
            return Ok(ts * 1000);
        }
    }

    Err(DataError::ParseError(format!(
        "Could not parse date: {}",
        date_str
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_timestamp() {
        assert!(parse_timestamp("2024-01-15").is_ok());
        assert!(parse_timestamp("2024-01-15 10:30:00").is_ok());
        assert!(parse_timestamp("1705312800000").is_ok()); // Unix ms
        assert!(parse_timestamp("1705312800").is_ok()); // Unix sec
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(matches!(
            CsvDataSource::new(Path::new("/nonexistent/prices.csv")),
            Err(DataError::NoDataAvailable)
        ));
    }

    fn write_csv(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", body).unwrap();
        path
    }

    #[test]
    fn test_fetch_sorts_and_validates() {
        let path = write_csv(
            "analyzer_data_unsorted.csv",
            "Date,Open,High,Low,Close,Volume\n\
             2024-01-16,101,103,100,102,1200\n\
             2024-01-15,100,102,99,101,1000\n\
             2024-01-17,102,104,101,103,1100\n",
        );

        let source = CsvDataSource::new(&path).unwrap();
        let series = source.fetch("TEST", Lookback::Month1).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), vec![101.0, 102.0, 103.0]);
    }

    #[test]
    fn test_fetch_trims_to_lookback_window() {
        // Two bars a year apart; a 1mo lookback keeps only the newest
        let path = write_csv(
            "analyzer_data_lookback.csv",
            "Date,Open,High,Low,Close,Volume\n\
             2023-01-15,90,92,89,91,1000\n\
             2024-01-15,100,102,99,101,1000\n",
        );

        let source = CsvDataSource::new(&path).unwrap();
        let series = source.fetch("TEST", Lookback::Month1).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.closes(), vec![101.0]);
    }

    #[test]
    fn test_empty_file_rejected() {
        let path = write_csv(
            "analyzer_data_empty.csv",
            "Date,Open,High,Low,Close,Volume\n",
        );

        let source = CsvDataSource::new(&path).unwrap();
        assert!(source.fetch("TEST", Lookback::Month6).is_err());
    }
}
