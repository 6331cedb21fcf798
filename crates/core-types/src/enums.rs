use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// Returns the opposite side of the order
    pub fn opposite(&self) -> Self {
        match self {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
    TrailingStop,
}

/// How long a working order remains active on the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeInForce {
    Day,
    GoodTillCanceled,
}

/// Which base price field of a bar feeds a moving average.
///
/// `Last` corresponds to the close of a completed bar and is the default
/// input for both the fast and slow series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceField {
    Open,
    High,
    Low,
    #[default]
    Last,
}

/// The moving-average family a crossover strategy runs on.
///
/// The engine never looks inside the computation; the family is handed to
/// the host's moving-average provider as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaFamily {
    Simple,
    Exponential,
    Hull,
    ZeroLagExponential,
}

impl fmt::Display for MaFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaFamily::Simple => write!(f, "SMA"),
            MaFamily::Exponential => write!(f, "EMA"),
            MaFamily::Hull => write!(f, "HMA"),
            MaFamily::ZeroLagExponential => write!(f, "ZLEMA"),
        }
    }
}
