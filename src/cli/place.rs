//! Handler for the `place` command.

use std::fmt::Display;

use crate::adapter::binance::FuturesClient;
use crate::cli::{output, PlaceArgs};
use crate::config::Settings;
use crate::domain::{OrderReceipt, OrderRequest};
use crate::error::Result;
use crate::service::OrderService;

/// Execute the place command: validate, connect, submit, display.
pub async fn execute(args: &PlaceArgs) -> Result<()> {
    // Validation runs before configuration is read or any connection is
    // attempted; an invalid request never touches the network.
    let request = OrderRequest::try_new(
        &args.symbol,
        &args.side,
        &args.order_type,
        args.quantity,
        args.price,
    )?;

    output::section("Order request");
    output::key_value("Symbol", request.symbol());
    output::key_value("Side", request.side());
    output::key_value("Type", request.order_type());
    output::key_value("Quantity", request.quantity());
    if let Some(price) = request.price() {
        output::key_value("Price", price);
    }
    println!();

    let settings = Settings::from_env()?;

    output::progress("Connecting to the futures testnet");
    let gateway = match FuturesClient::connect(&settings).await {
        Ok(gateway) => {
            output::progress_done(true);
            gateway
        }
        Err(e) => {
            output::progress_done(false);
            return Err(e.into());
        }
    };

    let service = OrderService::new(gateway);

    output::progress("Placing order");
    let receipt = match service.place(&request).await {
        Ok(receipt) => {
            output::progress_done(true);
            receipt
        }
        Err(e) => {
            output::progress_done(false);
            return Err(e.into());
        }
    };

    display_receipt(&receipt);
    output::ok("Order placed successfully");
    Ok(())
}

fn display_receipt(receipt: &OrderReceipt) {
    output::section("Order response");
    output::key_value("Order ID", field(&receipt.order_id));
    output::key_value("Symbol", field(&receipt.symbol));
    output::key_value("Side", field(&receipt.side));
    output::key_value("Type", field(&receipt.order_type));
    output::key_value("Status", field(&receipt.status));
    output::key_value("Executed qty", field(&receipt.executed_qty));
    output::key_value("Avg price", field(&receipt.avg_price));
    output::key_value("Timestamp", field(&receipt.timestamp));
    println!();
}

/// Absent response fields render as a dash rather than failing.
fn field<T: Display>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string)
}
