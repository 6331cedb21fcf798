//! Building and submitting the directional entry order.

use configuration::CrossoverParams;
use core_types::{OrderRequest, OrderSide, OrderType, ResultCode, TimeInForce};
use host::OrderGateway;
use rust_decimal::Decimal;
use uuid::Uuid;

/// Builds bracket entry requests and hands them to the host, one
/// submission per call, no retries.
///
/// Offsets are resolved once at construction: a tick count from the
/// strategy parameters times the instrument's tick size.
#[derive(Debug, Clone)]
pub struct OrderIssuer {
    quantity: u32,
    target_offset: Decimal,
    stop_offset: Decimal,
}

impl OrderIssuer {
    pub fn new(params: &CrossoverParams, tick_size: Decimal) -> Self {
        Self {
            quantity: params.quantity,
            target_offset: Decimal::from(params.target_ticks) * tick_size,
            stop_offset: Decimal::from(params.stop_ticks) * tick_size,
        }
    }

    /// Constructs a fresh market entry with the attached bracket: a limit
    /// target and a trailing stop, both good till canceled.
    pub fn build_request(&self, side: OrderSide) -> OrderRequest {
        OrderRequest {
            client_order_id: Uuid::new_v4(),
            side,
            quantity: self.quantity,
            order_type: OrderType::Market,
            time_in_force: TimeInForce::GoodTillCanceled,
            target_type: OrderType::Limit,
            target_offset: self.target_offset,
            stop_type: OrderType::TrailingStop,
            stop_offset: self.stop_offset,
        }
    }

    /// Submits one entry and returns the host's result code unchanged.
    ///
    /// The code is logged and propagated but never interpreted here; a
    /// rejection surfaces to the strategy only through the next cycle's
    /// fresh position read.
    pub fn submit<G: OrderGateway + ?Sized>(&self, gateway: &mut G, side: OrderSide) -> ResultCode {
        let request = self.build_request(side);
        let result = gateway.submit_entry(&request);
        tracing::info!(
            side = %side,
            quantity = request.quantity,
            target_offset = %request.target_offset,
            stop_offset = %request.stop_offset,
            result = %result,
            "entry order submitted"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::MaFamily;
    use rust_decimal_macros::dec;

    fn params() -> CrossoverParams {
        CrossoverParams {
            ma_family: MaFamily::Simple,
            fast_period: 9,
            slow_period: 9,
            fast_input: Default::default(),
            slow_input: Default::default(),
            target_ticks: 80,
            stop_ticks: 80,
            quantity: 1,
        }
    }

    #[test]
    fn offsets_are_ticks_times_tick_size() {
        let issuer = OrderIssuer::new(&params(), dec!(0.25));
        let request = issuer.build_request(OrderSide::Buy);
        assert_eq!(request.target_offset, dec!(20.00));
        assert_eq!(request.stop_offset, dec!(20.00));
    }

    #[test]
    fn requests_are_market_gtc_bracket_entries() {
        let issuer = OrderIssuer::new(&params(), dec!(0.25));
        let request = issuer.build_request(OrderSide::Sell);
        assert_eq!(request.side, OrderSide::Sell);
        assert_eq!(request.quantity, 1);
        assert_eq!(request.order_type, OrderType::Market);
        assert_eq!(request.time_in_force, TimeInForce::GoodTillCanceled);
        assert_eq!(request.target_type, OrderType::Limit);
        assert_eq!(request.stop_type, OrderType::TrailingStop);
    }

    #[test]
    fn each_request_is_built_fresh() {
        let issuer = OrderIssuer::new(&params(), dec!(0.25));
        let a = issuer.build_request(OrderSide::Buy);
        let b = issuer.build_request(OrderSide::Buy);
        assert_ne!(a.client_order_id, b.client_order_id);
    }
}
