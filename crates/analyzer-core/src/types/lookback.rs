//! Lookback period selectors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque lookback selector for a historical window.
///
/// The engine never interprets these; only the data source does, as a
/// trailing calendar window ending at the newest available bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Lookback {
    /// Trailing month
    #[serde(rename = "1mo")]
    Month1,
    /// Trailing 3 months
    #[serde(rename = "3mo")]
    Month3,
    /// Trailing 6 months
    #[serde(rename = "6mo")]
    #[default]
    Month6,
    /// Trailing year
    #[serde(rename = "1y")]
    Year1,
    /// Trailing 2 years
    #[serde(rename = "2y")]
    Year2,
    /// Trailing 5 years
    #[serde(rename = "5y")]
    Year5,
}

impl Lookback {
    /// Approximate size of the window in calendar days.
    pub fn approx_days(&self) -> i64 {
        match self {
            Lookback::Month1 => 31,
            Lookback::Month3 => 92,
            Lookback::Month6 => 183,
            Lookback::Year1 => 365,
            Lookback::Year2 => 731,
            Lookback::Year5 => 1827,
        }
    }

    /// Get all available lookback periods.
    pub fn all() -> &'static [Lookback] {
        &[
            Lookback::Month1,
            Lookback::Month3,
            Lookback::Month6,
            Lookback::Year1,
            Lookback::Year2,
            Lookback::Year5,
        ]
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lookback::Month1 => "1mo",
            Lookback::Month3 => "3mo",
            Lookback::Month6 => "6mo",
            Lookback::Year1 => "1y",
            Lookback::Year2 => "2y",
            Lookback::Year5 => "5y",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Lookback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1mo" => Ok(Lookback::Month1),
            "3mo" => Ok(Lookback::Month3),
            "6mo" => Ok(Lookback::Month6),
            "1y" => Ok(Lookback::Year1),
            "2y" => Ok(Lookback::Year2),
            "5y" => Ok(Lookback::Year5),
            _ => Err(format!("Invalid lookback period: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookback_parse() {
        assert_eq!(Lookback::from_str("1mo").unwrap(), Lookback::Month1);
        assert_eq!(Lookback::from_str("6mo").unwrap(), Lookback::Month6);
        assert_eq!(Lookback::from_str("5y").unwrap(), Lookback::Year5);
        assert!(Lookback::from_str("7d").is_err());
    }

    #[test]
    fn test_lookback_display_round_trip() {
        for &period in Lookback::all() {
            assert_eq!(Lookback::from_str(&period.to_string()).unwrap(), period);
        }
    }

    #[test]
    fn test_lookback_windows_increase() {
        let days: Vec<i64> = Lookback::all().iter().map(|p| p.approx_days()).collect();
        assert!(days.windows(2).all(|w| w[0] < w[1]));
    }
}
