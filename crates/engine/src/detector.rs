//! Crossover detection over the two most recent samples of two series.
//!
//! The detector is memoryless across bars: the one-step lookback it needs
//! already lives in the host's series storage, so it is a pure function of
//! four numbers. Equality on either sample pair is never a cross by
//! itself; a cross requires a strict inequality flip across the boundary.

use rust_decimal::Decimal;

/// The relationship change between the fast and slow series at the latest
/// completed sample. Derived fresh every bar, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    None,
    Up,
    Down,
}

/// Detects a crossover from the previous and current samples of each series.
pub fn detect(
    prev_fast: Decimal,
    prev_slow: Decimal,
    cur_fast: Decimal,
    cur_slow: Decimal,
) -> Crossover {
    if prev_fast <= prev_slow && cur_fast > cur_slow {
        Crossover::Up
    } else if prev_fast >= prev_slow && cur_fast < cur_slow {
        Crossover::Down
    } else {
        Crossover::None
    }
}

/// Applies `detect` to the last two samples of each series.
///
/// Fewer than two available samples is not an error; it is the warm-up
/// period, and the answer is `Crossover::None`.
pub fn detect_last(fast: &[Decimal], slow: &[Decimal]) -> Crossover {
    let (Some(f), Some(s)) = (fast.len().checked_sub(2), slow.len().checked_sub(2)) else {
        return Crossover::None;
    };
    detect(fast[f], slow[s], fast[f + 1], slow[s + 1])
}
