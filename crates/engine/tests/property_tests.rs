//! Property tests for the decision components.
//!
//! Uses proptest to verify:
//! 1. Detection is invariant under scaling both series by one positive constant
//! 2. Detection is a pure function (identical inputs, identical output)
//! 3. Up and Down are mutually exclusive for any single sample pair
//! 4. The gate fires exactly on an opposing open position

use core_types::{OrderSide, Position};
use engine::detector::{self, Crossover};
use engine::gate;
use proptest::prelude::*;
use rust_decimal::Decimal;

// ── Strategies (proptest) ────────────────────────────────────────────

/// Prices as decimals with two fractional digits.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_scale() -> impl Strategy<Value = Decimal> {
    (1i64..10_000).prop_map(Decimal::from)
}

proptest! {
    /// Scaling both series by the same positive constant never changes
    /// the detected crossover.
    #[test]
    fn detect_is_invariant_under_common_positive_scaling(
        prev_fast in arb_price(),
        prev_slow in arb_price(),
        cur_fast in arb_price(),
        cur_slow in arb_price(),
        scale in arb_scale(),
    ) {
        let plain = detector::detect(prev_fast, prev_slow, cur_fast, cur_slow);
        let scaled = detector::detect(
            prev_fast * scale,
            prev_slow * scale,
            cur_fast * scale,
            cur_slow * scale,
        );
        prop_assert_eq!(plain, scaled);
    }

    /// The detector has no hidden state.
    #[test]
    fn detect_is_idempotent(
        prev_fast in arb_price(),
        prev_slow in arb_price(),
        cur_fast in arb_price(),
        cur_slow in arb_price(),
    ) {
        let first = detector::detect(prev_fast, prev_slow, cur_fast, cur_slow);
        let second = detector::detect(prev_fast, prev_slow, cur_fast, cur_slow);
        prop_assert_eq!(first, second);
    }

    /// A single sample pair can never read as both Up and Down, and a
    /// cross requires the current samples to differ strictly.
    #[test]
    fn up_and_down_are_exclusive(
        prev_fast in arb_price(),
        prev_slow in arb_price(),
        cur_fast in arb_price(),
        cur_slow in arb_price(),
    ) {
        let result = detector::detect(prev_fast, prev_slow, cur_fast, cur_slow);
        if cur_fast == cur_slow {
            prop_assert_eq!(result, Crossover::None);
        }
        match result {
            Crossover::Up => prop_assert!(cur_fast > cur_slow),
            Crossover::Down => prop_assert!(cur_fast < cur_slow),
            Crossover::None => {}
        }
    }

    /// Buy flattens iff short; Sell flattens iff long; flat never flattens.
    #[test]
    fn gate_fires_exactly_on_opposing_positions(quantity in any::<i64>()) {
        let position = Position { quantity };
        prop_assert_eq!(
            gate::must_flatten_first(position, OrderSide::Buy),
            quantity < 0
        );
        prop_assert_eq!(
            gate::must_flatten_first(position, OrderSide::Sell),
            quantity > 0
        );
    }
}
