use core_types::{MaFamily, OrderRequest, Position, ResultCode};
use rust_decimal::Decimal;

/// Read access to the host's net trade position.
///
/// The engine takes exactly one snapshot per evaluation cycle; a position
/// change between the snapshot and a subsequent order command is corrected
/// by the next cycle's fresh read.
pub trait PositionReader {
    fn position(&self) -> Position;
}

/// The host's order-routing primitives.
///
/// All three calls are fire-and-forget from the engine's point of view:
/// `cancel_all_orders` and `flatten_position` report nothing back, and the
/// `ResultCode` from `submit_entry` is propagated without interpretation.
pub trait OrderGateway {
    /// Cancels every working order for the traded instrument.
    fn cancel_all_orders(&mut self);

    /// Closes the open position to zero with an opposing market action.
    fn flatten_position(&mut self);

    /// Submits a single directional entry with its attached bracket.
    fn submit_entry(&mut self, request: &OrderRequest) -> ResultCode;
}

/// The full host surface a strategy cycle needs.
///
/// Blanket-implemented so any type providing both halves qualifies; the
/// engine holds one `&mut dyn TradingHost` per cycle and performs its
/// single position read through the same object it commands.
pub trait TradingHost: PositionReader + OrderGateway {}

impl<T: PositionReader + OrderGateway> TradingHost for T {}

/// A named moving-average computation over a price series.
///
/// Implementations are pure functions of `(family, series, period)` and
/// must return one output value per input sample. The engine treats the
/// numbers as a black box and only ever inspects the last two.
pub trait MovingAverageProvider {
    fn compute(&self, family: MaFamily, series: &[Decimal], period: usize) -> Vec<Decimal>;
}
