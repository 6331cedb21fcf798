use crate::enums::{OrderSide, OrderType, PriceField, TimeInForce};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single price bar of the host's chart series.
///
/// Bars are appended by the host once per period and never mutated; the
/// engine only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Monotonically increasing bar number assigned by the host.
    pub index: u64,
    pub open_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

impl Bar {
    /// Returns the base price value selected by `field`.
    pub fn price(&self, field: PriceField) -> Decimal {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Last => self.close,
        }
    }
}

/// A snapshot of the net trade position held at the host.
///
/// The quantity is signed: positive for a long position, negative for a
/// short one, zero when flat. The host's execution subsystem is the only
/// writer; the engine reads one snapshot per evaluation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub quantity: i64,
}

impl Position {
    pub fn is_long(&self) -> bool {
        self.quantity > 0
    }

    pub fn is_short(&self) -> bool {
        self.quantity < 0
    }

    pub fn is_flat(&self) -> bool {
        self.quantity == 0
    }
}

/// A single directional entry with its attached bracket parameters.
///
/// Built fresh for every submission and discarded afterwards; nothing in
/// this system persists order requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub client_order_id: Uuid,
    pub side: OrderSide,
    pub quantity: u32,
    pub order_type: OrderType,
    pub time_in_force: TimeInForce,
    /// Order type of the attached profit target.
    pub target_type: OrderType,
    /// Price distance of the attached target from the fill price.
    pub target_offset: Decimal,
    /// Order type of the attached protective stop.
    pub stop_type: OrderType,
    /// Price distance of the attached stop from the fill price.
    pub stop_offset: Decimal,
}

/// The host's opaque answer to an order submission.
///
/// The engine propagates and logs this value but never branches on it;
/// interpreting success or failure is the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCode(pub i32);

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn bar() -> Bar {
        Bar {
            index: 7,
            open_time: Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap(),
            open: dec!(101.25),
            high: dec!(103.00),
            low: dec!(100.50),
            close: dec!(102.75),
            volume: dec!(1543),
        }
    }

    #[test]
    fn price_field_selects_the_right_component() {
        let b = bar();
        assert_eq!(b.price(PriceField::Open), dec!(101.25));
        assert_eq!(b.price(PriceField::High), dec!(103.00));
        assert_eq!(b.price(PriceField::Low), dec!(100.50));
        assert_eq!(b.price(PriceField::Last), dec!(102.75));
    }

    #[test]
    fn position_sign_helpers() {
        assert!(Position { quantity: 3 }.is_long());
        assert!(Position { quantity: -1 }.is_short());
        assert!(Position { quantity: 0 }.is_flat());
        assert!(!Position { quantity: 0 }.is_long());
        assert!(!Position { quantity: 0 }.is_short());
    }
}
