//! Technical indicators and the indicator engine.
//!
//! This crate provides the derived series of the analyzer:
//! - Moving averages (SMA, recursive EMA)
//! - Momentum indicators (RSI, MACD)
//! - The [`compute_indicators`] engine producing an aligned [`IndicatorSet`]
//!
//! All outputs keep one entry per input bar so they can be keyed by the
//! timestamps of the source series.

pub mod engine;
pub mod momentum;
pub mod moving_average;

pub use engine::{compute_indicators, IndicatorParams, IndicatorSet};
pub use momentum::{Macd, MacdPoint, Rsi};
pub use moving_average::{Ema, Sma};
