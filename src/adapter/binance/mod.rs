//! Binance USDT-M futures testnet adapter.

mod client;

pub use client::FuturesClient;
