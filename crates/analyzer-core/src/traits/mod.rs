//! Trait definitions.

mod indicator;
mod market_data;

pub use indicator::{Indicator, MultiOutputIndicator};
pub use market_data::MarketDataSource;
