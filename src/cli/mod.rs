//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod place;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Validated one-shot order placement on the Binance USDT-M futures testnet.
#[derive(Parser, Debug)]
#[command(name = "ordercast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate parameters and submit a single order
    Place(PlaceArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `ordercast check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Verify credentials and endpoint configuration
    Config,
    /// Test authenticated connectivity to the exchange
    Connection,
}

/// Arguments for the `place` subcommand.
///
/// Side and type stay raw strings here; the validation layer owns their
/// normalization and error reporting.
#[derive(Parser, Debug)]
pub struct PlaceArgs {
    /// Trading pair (e.g., BTCUSDT)
    #[arg(long)]
    pub symbol: String,

    /// Order side: BUY or SELL
    #[arg(long)]
    pub side: String,

    /// Order type: MARKET or LIMIT
    #[arg(long = "type")]
    pub order_type: String,

    /// Order quantity
    #[arg(long)]
    pub quantity: Decimal,

    /// Limit price (required for LIMIT orders)
    #[arg(long)]
    pub price: Option<Decimal>,
}
