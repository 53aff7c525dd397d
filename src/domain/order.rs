//! Order request validation and normalization.
//!
//! [`OrderRequest::try_new`] is the single entry point: it runs the five
//! field validations in order (symbol, side, type, quantity, price) and
//! fails on the first violation, so a request that exists has passed all of
//! them. A LIMIT order without a price is unrepresentable: the price lives
//! inside [`OrderKind::Limit`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use super::error::ValidationError;
use super::symbol::Symbol;

/// Direction of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Buy the base asset.
    Buy,
    /// Sell the base asset.
    Sell,
}

impl Side {
    /// Wire representation expected by the exchange.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ValidationError::InvalidSide { side: raw.into() }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution style of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    /// Execute immediately at the best available price.
    Market,
    /// Execute only at the given price or better.
    Limit,
}

impl OrderType {
    /// Wire representation expected by the exchange.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Market => "MARKET",
            Self::Limit => "LIMIT",
        }
    }
}

impl FromStr for OrderType {
    type Err = ValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "MARKET" => Ok(Self::Market),
            "LIMIT" => Ok(Self::Limit),
            _ => Err(ValidationError::InvalidOrderType {
                order_type: raw.into(),
            }),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Execution style together with the data it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    /// Market order; never carries a price.
    Market,
    /// Limit order with its validated price.
    Limit {
        /// Limit price, strictly positive.
        price: Decimal,
    },
}

/// A fully validated order, ready for submission.
///
/// Instances only exist when all five fields passed validation; downstream
/// code never re-checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    symbol: Symbol,
    side: Side,
    kind: OrderKind,
    quantity: Decimal,
}

impl OrderRequest {
    /// Validate raw parameters and build a request.
    ///
    /// Checks run in order: symbol, side, type, quantity, price. The first
    /// failure aborts with a [`ValidationError`] naming the field and value.
    /// A price supplied with a MARKET order is discarded with a logged
    /// warning rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn try_new(
        symbol: &str,
        side: &str,
        order_type: &str,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Result<Self, ValidationError> {
        let symbol = Symbol::parse(symbol)?;
        let side = Side::from_str(side)?;
        let order_type = OrderType::from_str(order_type)?;
        let quantity = validate_quantity(quantity)?;
        let kind = validate_price(price, order_type)?;

        Ok(Self {
            symbol,
            side,
            kind,
            quantity,
        })
    }

    /// The validated trading pair.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// The order direction.
    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The execution style with its attached data.
    #[must_use]
    pub const fn kind(&self) -> OrderKind {
        self.kind
    }

    /// The execution style without its data.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        match self.kind {
            OrderKind::Market => OrderType::Market,
            OrderKind::Limit { .. } => OrderType::Limit,
        }
    }

    /// The validated quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// The validated price; `None` for market orders.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        match self.kind {
            OrderKind::Market => None,
            OrderKind::Limit { price } => Some(price),
        }
    }
}

impl fmt::Display for OrderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "symbol={} side={} type={} quantity={}",
            self.symbol,
            self.side,
            self.order_type(),
            self.quantity
        )?;
        if let Some(price) = self.price() {
            write!(f, " price={price}")?;
        }
        Ok(())
    }
}

fn validate_quantity(quantity: Decimal) -> Result<Decimal, ValidationError> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity { quantity });
    }
    Ok(quantity)
}

fn validate_price(
    price: Option<Decimal>,
    order_type: OrderType,
) -> Result<OrderKind, ValidationError> {
    match order_type {
        OrderType::Limit => {
            let price = price.ok_or(ValidationError::MissingLimitPrice)?;
            if price <= Decimal::ZERO {
                return Err(ValidationError::NonPositivePrice { price });
            }
            Ok(OrderKind::Limit { price })
        }
        OrderType::Market => {
            if let Some(price) = price {
                warn!(%price, "price is ignored for MARKET orders");
            }
            Ok(OrderKind::Market)
        }
    }
}
