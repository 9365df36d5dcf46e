//! Type definitions.

mod bar;
mod lookback;

pub use bar::{Bar, PriceSeries};
pub use lookback::Lookback;
