//! Reference moving-average computations.
//!
//! The engine treats moving averages as a host facility behind the
//! `MovingAverageProvider` trait; this module is the provider used by the
//! replay harness and the test suite. Each family produces one output per
//! input sample, warming up over whatever history exists rather than
//! emitting gaps, which is how the charting platform's studies behave.

use crate::interface::MovingAverageProvider;
use core_types::MaFamily;
use rust_decimal::Decimal;

/// Computes all four supported moving-average families.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinMaProvider;

impl MovingAverageProvider for BuiltinMaProvider {
    fn compute(&self, family: MaFamily, series: &[Decimal], period: usize) -> Vec<Decimal> {
        match family {
            MaFamily::Simple => simple(series, period),
            MaFamily::Exponential => exponential(series, period),
            MaFamily::Hull => hull(series, period),
            MaFamily::ZeroLagExponential => zero_lag_exponential(series, period),
        }
    }
}

/// Simple moving average: mean of the trailing window, shorter at the
/// front of the series while history accumulates.
pub fn simple(series: &[Decimal], period: usize) -> Vec<Decimal> {
    let period = period.max(1);
    let mut out = Vec::with_capacity(series.len());
    let mut window_sum = Decimal::ZERO;
    for (i, value) in series.iter().enumerate() {
        window_sum += *value;
        if i >= period {
            window_sum -= series[i - period];
        }
        let width = period.min(i + 1);
        out.push(window_sum / Decimal::from(width));
    }
    out
}

/// Exponential moving average with the conventional `2 / (period + 1)`
/// smoothing factor, seeded with the first sample.
pub fn exponential(series: &[Decimal], period: usize) -> Vec<Decimal> {
    let period = period.max(1);
    let alpha = Decimal::from(2u32) / Decimal::from(period as u64 + 1);
    let mut out = Vec::with_capacity(series.len());
    let mut prev: Option<Decimal> = None;
    for value in series {
        let next = match prev {
            None => *value,
            Some(p) => p + alpha * (*value - p),
        };
        out.push(next);
        prev = Some(next);
    }
    out
}

/// Hull moving average: `WMA(2 * WMA(n/2) - WMA(n), sqrt(n))`.
pub fn hull(series: &[Decimal], period: usize) -> Vec<Decimal> {
    let period = period.max(1);
    let half = (period / 2).max(1);
    let smooth = (f64::sqrt(period as f64).round() as usize).max(1);

    let wma_half = weighted(series, half);
    let wma_full = weighted(series, period);
    let two = Decimal::from(2u32);
    let raw: Vec<Decimal> = wma_half
        .iter()
        .zip(&wma_full)
        .map(|(h, f)| two * *h - *f)
        .collect();
    weighted(&raw, smooth)
}

/// Zero-lag exponential moving average: an EMA over a de-lagged series
/// `2 * x[i] - x[i - lag]` with `lag = (period - 1) / 2`.
pub fn zero_lag_exponential(series: &[Decimal], period: usize) -> Vec<Decimal> {
    let period = period.max(1);
    let lag = (period - 1) / 2;
    let two = Decimal::from(2u32);
    let de_lagged: Vec<Decimal> = series
        .iter()
        .enumerate()
        .map(|(i, value)| two * *value - series[i.saturating_sub(lag)])
        .collect();
    exponential(&de_lagged, period)
}

/// Linearly weighted moving average over the trailing window; the most
/// recent sample carries the largest weight.
fn weighted(series: &[Decimal], period: usize) -> Vec<Decimal> {
    let period = period.max(1);
    let mut out = Vec::with_capacity(series.len());
    for i in 0..series.len() {
        let width = period.min(i + 1);
        let start = i + 1 - width;
        let mut numerator = Decimal::ZERO;
        let mut denominator = Decimal::ZERO;
        for (k, value) in series[start..=i].iter().enumerate() {
            let weight = Decimal::from(k as u64 + 1);
            numerator += weight * *value;
            denominator += weight;
        }
        out.push(numerator / denominator);
    }
    out
}
