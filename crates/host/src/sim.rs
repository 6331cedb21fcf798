//! An in-memory stand-in for the trading platform.
//!
//! The real platform routes orders to its own simulation system; this
//! module reproduces just enough of that surface for replays and tests:
//! a signed net position, a working-order count, and a log of every call
//! the engine makes, in order.

use crate::interface::{OrderGateway, PositionReader};
use core_types::{OrderRequest, OrderSide, Position, ResultCode};

/// One host primitive invoked by the engine, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    CancelAll,
    Flatten,
    Entry(OrderSide),
}

/// A minimal simulated host.
///
/// Entries fill immediately at the configured quantity and move the signed
/// position; flatten zeroes it. There is no fill price, fee, slippage, or
/// PnL model here on purpose.
#[derive(Debug)]
pub struct SimulatedHost {
    position: Position,
    working_orders: u32,
    next_result_code: i32,
    calls: Vec<HostCall>,
    submissions: Vec<OrderRequest>,
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedHost {
    pub fn new() -> Self {
        Self {
            position: Position::default(),
            working_orders: 0,
            next_result_code: 1,
            calls: Vec::new(),
            submissions: Vec::new(),
        }
    }

    /// Starts the host with an already-open position, as after a restart
    /// mid-session.
    pub fn with_position(quantity: i64) -> Self {
        Self {
            position: Position { quantity },
            ..Self::new()
        }
    }

    /// Every engine-issued call, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Every submitted entry request, oldest first.
    pub fn submissions(&self) -> &[OrderRequest] {
        &self.submissions
    }

    pub fn working_orders(&self) -> u32 {
        self.working_orders
    }
}

impl PositionReader for SimulatedHost {
    fn position(&self) -> Position {
        self.position
    }
}

impl OrderGateway for SimulatedHost {
    fn cancel_all_orders(&mut self) {
        tracing::debug!(cancelled = self.working_orders, "cancel all working orders");
        self.working_orders = 0;
        self.calls.push(HostCall::CancelAll);
    }

    fn flatten_position(&mut self) {
        tracing::debug!(quantity = self.position.quantity, "flatten position");
        self.position = Position::default();
        self.calls.push(HostCall::Flatten);
    }

    fn submit_entry(&mut self, request: &OrderRequest) -> ResultCode {
        let signed = match request.side {
            OrderSide::Buy => request.quantity as i64,
            OrderSide::Sell => -(request.quantity as i64),
        };
        self.position.quantity += signed;
        // The entry's attached target and stop stay working at the host.
        self.working_orders += 2;

        let code = ResultCode(self.next_result_code);
        self.next_result_code += 1;
        self.calls.push(HostCall::Entry(request.side));
        self.submissions.push(request.clone());
        tracing::debug!(
            side = %request.side,
            quantity = request.quantity,
            position = self.position.quantity,
            result = %code,
            "simulated entry filled"
        );
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{OrderType, TimeInForce};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn entry(side: OrderSide) -> OrderRequest {
        OrderRequest {
            client_order_id: Uuid::new_v4(),
            side,
            quantity: 2,
            order_type: OrderType::Market,
            time_in_force: TimeInForce::GoodTillCanceled,
            target_type: OrderType::Limit,
            target_offset: dec!(20),
            stop_type: OrderType::TrailingStop,
            stop_offset: dec!(20),
        }
    }

    #[test]
    fn entries_move_the_signed_position() {
        let mut host = SimulatedHost::new();
        host.submit_entry(&entry(OrderSide::Buy));
        assert_eq!(host.position().quantity, 2);
        host.submit_entry(&entry(OrderSide::Sell));
        assert_eq!(host.position().quantity, 0);
        host.submit_entry(&entry(OrderSide::Sell));
        assert_eq!(host.position().quantity, -2);
    }

    #[test]
    fn result_codes_increase_per_submission() {
        let mut host = SimulatedHost::new();
        let first = host.submit_entry(&entry(OrderSide::Buy));
        let second = host.submit_entry(&entry(OrderSide::Buy));
        assert!(second.0 > first.0);
    }

    #[test]
    fn cancel_all_clears_working_orders_and_flatten_zeroes_position() {
        let mut host = SimulatedHost::with_position(3);
        host.submit_entry(&entry(OrderSide::Buy));
        assert_eq!(host.working_orders(), 2);
        host.cancel_all_orders();
        host.flatten_position();
        assert_eq!(host.working_orders(), 0);
        assert!(host.position().is_flat());
        assert_eq!(
            host.calls(),
            &[
                HostCall::Entry(OrderSide::Buy),
                HostCall::CancelAll,
                HostCall::Flatten,
            ]
        );
    }
}
