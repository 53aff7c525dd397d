//! Exchange port for order submission.
//!
//! The [`OrderGateway`] trait is the single integration point with an
//! exchange: credential verification plus the two order operations. The
//! validation and normalization core only ever sees this trait, so it is
//! testable against a mock with no network access.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{OrderReceipt, Side, Symbol};
use crate::error::ExecutionError;

/// Opaque order response record as returned by an exchange.
///
/// All fields are optional and unknown wire fields are ignored; shaping the
/// response into a fixed projection happens in the [`OrderReceipt`]
/// conversion, never at the transport layer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawOrderResponse {
    /// Exchange-assigned order identifier.
    pub order_id: Option<i64>,
    /// Trading pair echoed by the exchange.
    pub symbol: Option<String>,
    /// Order side echoed by the exchange.
    pub side: Option<String>,
    /// Order type echoed by the exchange.
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    /// Order status.
    pub status: Option<String>,
    /// Executed quantity, transmitted as a decimal string.
    pub executed_qty: Option<String>,
    /// Average fill price, transmitted as a decimal string.
    pub avg_price: Option<String>,
    /// Last update time as epoch milliseconds.
    pub update_time: Option<i64>,
}

impl From<RawOrderResponse> for OrderReceipt {
    fn from(raw: RawOrderResponse) -> Self {
        Self {
            order_id: raw.order_id,
            symbol: raw.symbol,
            side: raw.side,
            order_type: raw.order_type,
            status: raw.status,
            executed_qty: parse_decimal(raw.executed_qty.as_deref()),
            avg_price: parse_decimal(raw.avg_price.as_deref()),
            timestamp: raw
                .update_time
                .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        }
    }
}

/// A wire decimal that fails to parse is treated as absent.
fn parse_decimal(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|s| s.parse().ok())
}

/// Gateway for submitting orders to an exchange.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Verify connectivity and credentials with an authenticated call.
    async fn verify_connectivity(&self) -> Result<(), ExecutionError>;

    /// Submit a market order.
    async fn place_market_order(
        &self,
        symbol: &Symbol,
        side: Side,
        quantity: Decimal,
    ) -> Result<RawOrderResponse, ExecutionError>;

    /// Submit a good-till-cancelled limit order.
    async fn place_limit_order(
        &self,
        symbol: &Symbol,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<RawOrderResponse, ExecutionError>;

    /// Exchange name for logging.
    fn exchange_name(&self) -> &'static str;
}
