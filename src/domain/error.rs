//! Validation errors for order parameters.
//!
//! Every variant names the offending field and carries the rejected value,
//! so callers can tell validation failures apart from transport failures
//! without inspecting message strings. These errors are returned by the
//! validating constructors on [`crate::domain::Symbol`] and
//! [`crate::domain::OrderRequest`].

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when a raw order parameter fails validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Symbol was empty or whitespace-only.
    #[error("symbol must be a non-empty string")]
    EmptySymbol,

    /// Symbol contained characters outside `[A-Z0-9]`.
    #[error("symbol must contain only alphanumeric characters, got: {symbol}")]
    SymbolNotAlphanumeric {
        /// The rejected symbol, after trimming and upper-casing.
        symbol: String,
    },

    /// Symbol was shorter than the minimum length.
    #[error("symbol must be at least {min} characters, got: {symbol}")]
    SymbolTooShort {
        /// The rejected symbol.
        symbol: String,
        /// The minimum accepted length.
        min: usize,
    },

    /// Side was not BUY or SELL.
    #[error("side must be BUY or SELL, got: {side}")]
    InvalidSide {
        /// The rejected side value.
        side: String,
    },

    /// Order type was not MARKET or LIMIT.
    #[error("order type must be MARKET or LIMIT, got: {order_type}")]
    InvalidOrderType {
        /// The rejected order type value.
        order_type: String,
    },

    /// Quantity was zero or negative.
    #[error("quantity must be positive, got: {quantity}")]
    NonPositiveQuantity {
        /// The rejected quantity.
        quantity: Decimal,
    },

    /// A LIMIT order was requested without a price.
    #[error("price is required for LIMIT orders")]
    MissingLimitPrice,

    /// Price was zero or negative.
    #[error("price must be positive, got: {price}")]
    NonPositivePrice {
        /// The rejected price.
        price: Decimal,
    },
}
