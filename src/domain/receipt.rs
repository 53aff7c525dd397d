//! Normalized order receipt.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Fixed-shape projection of an exchange order response.
///
/// Every field is optional: a field the exchange did not return stays
/// `None`; normalization never substitutes defaults and never fails on a
/// missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderReceipt {
    /// Exchange-assigned order identifier.
    pub order_id: Option<i64>,
    /// Trading pair echoed by the exchange.
    pub symbol: Option<String>,
    /// Order side echoed by the exchange.
    pub side: Option<String>,
    /// Order type echoed by the exchange.
    pub order_type: Option<String>,
    /// Order status (e.g. `NEW`, `FILLED`).
    pub status: Option<String>,
    /// Quantity executed so far.
    pub executed_qty: Option<Decimal>,
    /// Average fill price.
    pub avg_price: Option<Decimal>,
    /// Last update time reported by the exchange.
    pub timestamp: Option<DateTime<Utc>>,
}

impl fmt::Display for OrderReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string)
        }

        write!(
            f,
            "order_id={} symbol={} side={} type={} status={} executed_qty={} avg_price={} timestamp={}",
            opt(&self.order_id),
            opt(&self.symbol),
            opt(&self.side),
            opt(&self.order_type),
            opt(&self.status),
            opt(&self.executed_qty),
            opt(&self.avg_price),
            opt(&self.timestamp),
        )
    }
}
