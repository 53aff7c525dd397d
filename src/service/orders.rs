//! Order submission over an [`OrderGateway`].

use tracing::info;

use crate::domain::{OrderKind, OrderReceipt, OrderRequest};
use crate::error::ExecutionError;
use crate::port::OrderGateway;

/// Dispatches validated orders to a gateway and normalizes the response.
pub struct OrderService<G> {
    gateway: G,
}

impl<G: OrderGateway> OrderService<G> {
    /// Wrap a gateway.
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Submit a validated order and return the normalized receipt.
    ///
    /// Logs a summary of the outgoing request and of the normalized
    /// response. Market orders submit symbol, side and quantity; limit
    /// orders additionally carry the price and a good-till-cancelled
    /// time-in-force set by the gateway.
    ///
    /// # Errors
    ///
    /// Propagates the gateway's [`ExecutionError`] untouched; nothing is
    /// retried.
    pub async fn place(&self, request: &OrderRequest) -> Result<OrderReceipt, ExecutionError> {
        info!(
            exchange = self.gateway.exchange_name(),
            %request,
            "order request"
        );

        let raw = match request.kind() {
            OrderKind::Market => {
                self.gateway
                    .place_market_order(request.symbol(), request.side(), request.quantity())
                    .await?
            }
            OrderKind::Limit { price } => {
                self.gateway
                    .place_limit_order(request.symbol(), request.side(), request.quantity(), price)
                    .await?
            }
        };

        let receipt = OrderReceipt::from(raw);
        info!(%receipt, "order response");
        Ok(receipt)
    }
}
