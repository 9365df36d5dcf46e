//! Error types for the analyzer.

use thiserror::Error;

/// Top-level analyzer error.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Invalid input series errors.
///
/// A [`crate::types::PriceSeries`] is validated on construction; the
/// indicator engine is never invoked on data that fails these checks.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Price series is empty")]
    EmptySeries,

    #[error("Timestamps out of order at index {index}")]
    OutOfOrder { index: usize },

    #[error("Duplicate timestamp at index {index}")]
    DuplicateTimestamp { index: usize },

    #[error("Indicator set length {indicators} does not match series length {series}")]
    LengthMismatch { series: usize, indicators: usize },
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("No data available for the requested range")]
    NoDataAvailable,

    #[error("Invalid lookback period: {0}")]
    InvalidLookback(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid series: {0}")]
    InvalidSeries(#[from] InputError),
}

/// Result type alias for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
