//! Core types and traits for the stock analyzer.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, PriceSeries)
//! - Lookback period selectors
//! - Core traits for indicators and data sources

pub mod error;
pub mod traits;
pub mod types;

pub use error::{AnalyzerError, AnalyzerResult};
pub use traits::*;
pub use types::*;
