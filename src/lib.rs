//! Ordercast - validated one-shot order placement on the Binance USDT-M
//! futures testnet.
//!
//! Each invocation validates five order parameters (symbol, side, type,
//! quantity, price), submits a single MARKET or LIMIT order over the
//! exchange's signed REST API, and normalizes the response into a
//! fixed-shape receipt. Nothing is retried and nothing persists beyond the
//! log files.
//!
//! # Modules
//!
//! - [`domain`] - Validated order types; the only way to build an
//!   `OrderRequest` is to pass every field check
//! - [`port`] - The [`port::OrderGateway`] trait isolating the exchange
//! - [`adapter`] - Binance futures testnet implementation of the gateway
//! - [`service`] - Order dispatch and response normalization
//! - [`cli`] - Command definitions and handlers
//! - [`config`] - Environment-backed settings and the logging context
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use ordercast::domain::OrderRequest;
//! use rust_decimal_macros::dec;
//!
//! let request =
//!     OrderRequest::try_new("btcusdt", "buy", "market", dec!(0.001), None)?;
//! assert_eq!(request.symbol().as_str(), "BTCUSDT");
//! # Ok::<(), ordercast::domain::ValidationError>(())
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod service;
