use crate::error::ConfigError;
use core_types::{MaFamily, PriceField};
use rust_decimal::Decimal;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub instrument: Instrument,
    pub strategy: CrossoverParams,
}

impl Config {
    /// Rejects configurations the engine must never run with.
    ///
    /// Validation lives here, at construction time, so the strategy core
    /// can assume its parameters are well-formed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.instrument.validate()?;
        self.strategy.validate()
    }
}

/// The traded instrument as the host describes it.
#[derive(Debug, Clone, Deserialize)]
pub struct Instrument {
    /// The symbol the strategy trades (e.g., "ESM5").
    pub symbol: String,
    /// The minimum price increment. Bracket offsets are expressed as a
    /// tick count multiplied by this value.
    pub tick_size: Decimal,
}

impl Instrument {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_size <= Decimal::ZERO {
            return Err(ConfigError::ValidationError(
                "instrument.tick_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for the generic moving-average crossover strategy.
///
/// The defaults mirror the per-study defaults of the host platform's
/// crossover studies: both periods 9, both inputs the last price, an
/// 80-tick bracket, and a single contract per entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CrossoverParams {
    /// Which moving-average family both series are computed with.
    pub ma_family: MaFamily,
    #[serde(default = "default_period")]
    pub fast_period: usize,
    #[serde(default = "default_period")]
    pub slow_period: usize,
    /// Base price field feeding the faster series.
    #[serde(default)]
    pub fast_input: PriceField,
    /// Base price field feeding the slower series.
    #[serde(default)]
    pub slow_input: PriceField,
    /// Attached profit target distance, in ticks.
    #[serde(default = "default_bracket_ticks")]
    pub target_ticks: u32,
    /// Attached trailing stop distance, in ticks.
    #[serde(default = "default_bracket_ticks")]
    pub stop_ticks: u32,
    /// Contracts per entry order.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_period() -> usize {
    9
}

fn default_bracket_ticks() -> u32 {
    80
}

fn default_quantity() -> u32 {
    1
}

impl CrossoverParams {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fast_period == 0 || self.slow_period == 0 {
            return Err(ConfigError::ValidationError(
                "strategy periods must be positive".to_string(),
            ));
        }
        if self.quantity == 0 {
            return Err(ConfigError::ValidationError(
                "strategy.quantity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
