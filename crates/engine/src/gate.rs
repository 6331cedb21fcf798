//! Position-aware gating of a proposed entry.

use core_types::{OrderSide, Position};

/// Returns true when a cancel-all and flatten must precede the proposed
/// entry, i.e. exactly when the entry opposes the open position.
///
/// The gate only decides *whether* the flatten step is required. It never
/// suppresses the entry itself; a same-direction position leaves the
/// entry to the host's own position-limit enforcement.
pub fn must_flatten_first(position: Position, proposed: OrderSide) -> bool {
    match proposed {
        OrderSide::Buy => position.is_short(),
        OrderSide::Sell => position.is_long(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buy_flattens_only_against_a_short() {
        assert!(must_flatten_first(Position { quantity: -2 }, OrderSide::Buy));
        assert!(!must_flatten_first(Position { quantity: 0 }, OrderSide::Buy));
        assert!(!must_flatten_first(Position { quantity: 5 }, OrderSide::Buy));
    }

    #[test]
    fn sell_flattens_only_against_a_long() {
        assert!(must_flatten_first(Position { quantity: 2 }, OrderSide::Sell));
        assert!(!must_flatten_first(Position { quantity: 0 }, OrderSide::Sell));
        assert!(!must_flatten_first(
            Position { quantity: -5 },
            OrderSide::Sell
        ));
    }
}
