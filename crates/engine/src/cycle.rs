//! The per-bar strategy cycle.

use crate::detector::{self, Crossover};
use crate::error::EngineError;
use crate::gate;
use crate::issuer::OrderIssuer;
use configuration::CrossoverParams;
use core_types::{Bar, OrderSide, ResultCode};
use host::{MovingAverageProvider, TradingHost};
use rust_decimal::Decimal;

/// What a single engine invocation decided and did.
///
/// Ephemeral, returned to the caller for logging and tests; the engine
/// itself keeps no record of past cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub crossover: Crossover,
    /// Whether a cancel-all and flatten preceded the entry.
    pub flattened: bool,
    /// The host's result code for the entry, when one was submitted.
    pub submission: Option<ResultCode>,
}

impl CycleReport {
    fn idle() -> Self {
        Self {
            crossover: Crossover::None,
            flattened: false,
            submission: None,
        }
    }
}

/// The generic moving-average crossover strategy engine.
///
/// One instance replaces the four per-family studies: the family, periods,
/// price inputs, and bracket sizes all come from `CrossoverParams`, and
/// the moving-average math itself stays behind the host's provider.
///
/// The engine is invoked by the host once per data update on a single
/// thread; it holds only immutable configuration, so each invocation is a
/// pure function of the inputs handed to it.
#[derive(Debug, Clone)]
pub struct CrossoverEngine {
    params: CrossoverParams,
    issuer: OrderIssuer,
}

impl CrossoverEngine {
    /// Creates a new engine for one instrument.
    ///
    /// It performs validation to ensure the parameters are logical, even
    /// though the configuration layer already rejects these at load time.
    pub fn new(params: CrossoverParams, tick_size: Decimal) -> Result<Self, EngineError> {
        if params.fast_period == 0 || params.slow_period == 0 {
            return Err(EngineError::InvalidParameters(
                "moving-average periods must be positive".to_string(),
            ));
        }
        if params.quantity == 0 {
            return Err(EngineError::InvalidParameters(
                "entry quantity must be positive".to_string(),
            ));
        }
        if tick_size <= Decimal::ZERO {
            return Err(EngineError::InvalidParameters(
                "tick size must be positive".to_string(),
            ));
        }

        let issuer = OrderIssuer::new(&params, tick_size);
        Ok(Self { params, issuer })
    }

    /// Runs one evaluation cycle against the current bar series.
    ///
    /// The fast and slow averages are recomputed unconditionally so their
    /// history stays current across intrabar updates; only an invocation
    /// with `bar_closed` set may act on a crossover, which is what keeps
    /// the engine to at most one entry per closed bar.
    ///
    /// Host-call outcomes are fire-and-forget: the cycle cannot fail, and
    /// a rejected flatten or entry is visible only in the returned report
    /// until the next cycle's fresh position read.
    pub fn on_bar_update<H: TradingHost + ?Sized>(
        &self,
        bars: &[Bar],
        bar_closed: bool,
        provider: &dyn MovingAverageProvider,
        host: &mut H,
    ) -> CycleReport {
        let fast_input: Vec<Decimal> = bars
            .iter()
            .map(|bar| bar.price(self.params.fast_input))
            .collect();
        let slow_input: Vec<Decimal> = bars
            .iter()
            .map(|bar| bar.price(self.params.slow_input))
            .collect();

        let fast = provider.compute(self.params.ma_family, &fast_input, self.params.fast_period);
        let slow = provider.compute(self.params.ma_family, &slow_input, self.params.slow_period);

        if !bar_closed {
            tracing::trace!("bar still forming, no evaluation");
            return CycleReport::idle();
        }

        let crossover = detector::detect_last(&fast, &slow);
        tracing::debug!(
            family = %self.params.ma_family,
            fast = ?fast.last(),
            slow = ?slow.last(),
            crossover = ?crossover,
            "bar closed, evaluated crossover"
        );

        match crossover {
            Crossover::None => CycleReport::idle(),
            Crossover::Up => self.enter(OrderSide::Buy, crossover, host),
            Crossover::Down => self.enter(OrderSide::Sell, crossover, host),
        }
    }

    /// Gates against the current position, flattens if required, then
    /// submits the entry. The flatten sub-steps run in a fixed order and
    /// their outcomes are not observed.
    fn enter<H: TradingHost + ?Sized>(
        &self,
        side: OrderSide,
        crossover: Crossover,
        host: &mut H,
    ) -> CycleReport {
        let position = host.position();
        let flatten = gate::must_flatten_first(position, side);
        if flatten {
            tracing::info!(
                position = position.quantity,
                side = %side,
                "opposing position open, cancelling orders and flattening"
            );
            host.cancel_all_orders();
            host.flatten_position();
        }

        let result = self.issuer.submit(host, side);
        CycleReport {
            crossover,
            flattened: flatten,
            submission: Some(result),
        }
    }
}
