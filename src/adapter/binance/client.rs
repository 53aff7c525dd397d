//! Signed REST client for the Binance USDT-M futures testnet.
//!
//! Implements [`OrderGateway`] over two endpoints: `POST /fapi/v1/order`
//! for submission and `GET /fapi/v2/account` for credential verification.
//! Every request signs its query string with HMAC-SHA256 and carries the
//! API key in the `X-MBX-APIKEY` header. Exchange rejections decode into
//! the `{code, msg}` payload; transport failures surface separately so
//! callers can tell an invalid request from a connectivity problem.

use async_trait::async_trait;
use chrono::Utc;
use hmac::{Hmac, Mac};
use rust_decimal::Decimal;
use serde::Deserialize;
use sha2::Sha256;
use tracing::{debug, info};

use crate::config::Settings;
use crate::domain::{Side, Symbol};
use crate::error::ExecutionError;
use crate::port::{OrderGateway, RawOrderResponse};

type HmacSha256 = Hmac<Sha256>;

const ORDER_PATH: &str = "/fapi/v1/order";
const ACCOUNT_PATH: &str = "/fapi/v2/account";
const API_KEY_HEADER: &str = "X-MBX-APIKEY";
const TIME_IN_FORCE_GTC: &str = "GTC";

/// Error payload returned by the exchange on rejected requests.
#[derive(Debug, Deserialize)]
struct ApiError {
    code: i64,
    msg: String,
}

/// Authenticated client for the futures testnet REST API.
pub struct FuturesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl FuturesClient {
    /// Build a client without touching the network.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            api_secret: settings.api_secret.clone(),
        }
    }

    /// Build a client and verify credentials with an authenticated call.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::AuthFailed`] when the exchange rejects the
    /// credentials and [`ExecutionError::Network`] on transport failure.
    pub async fn connect(settings: &Settings) -> Result<Self, ExecutionError> {
        let client = Self::new(settings);
        info!(endpoint = %client.base_url, "verifying exchange credentials");
        client.verify_connectivity().await?;
        Ok(client)
    }

    /// HMAC-SHA256 signature of a query string, hex-encoded.
    fn sign(&self, query: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(query.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Append the timestamp and signature the exchange requires.
    fn signed_query(&self, params: &[(&str, String)]) -> String {
        let mut parts: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
        parts.push(format!("timestamp={}", Utc::now().timestamp_millis()));
        let query = parts.join("&");
        let signature = self.sign(&query);
        format!("{query}&signature={signature}")
    }

    fn market_params(symbol: &Symbol, side: Side, quantity: Decimal) -> Vec<(&'static str, String)> {
        vec![
            ("symbol", symbol.to_string()),
            ("side", side.as_str().to_string()),
            ("type", "MARKET".to_string()),
            ("quantity", quantity.to_string()),
        ]
    }

    fn limit_params(
        symbol: &Symbol,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("symbol", symbol.to_string()),
            ("side", side.as_str().to_string()),
            ("type", "LIMIT".to_string()),
            ("timeInForce", TIME_IN_FORCE_GTC.to_string()),
            ("quantity", quantity.to_string()),
            ("price", price.to_string()),
        ]
    }

    async fn submit(&self, params: &[(&str, String)]) -> Result<RawOrderResponse, ExecutionError> {
        let url = format!("{}{}?{}", self.base_url, ORDER_PATH, self.signed_query(params));
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| ExecutionError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ExecutionError::Network(e.to_string()))?;

        if status.is_success() {
            serde_json::from_slice(&body).map_err(|e| ExecutionError::InvalidResponse(e.to_string()))
        } else {
            Err(Self::rejection(status, &body))
        }
    }

    /// Decode a non-2xx body into the exchange's error payload.
    fn rejection(status: reqwest::StatusCode, body: &[u8]) -> ExecutionError {
        match serde_json::from_slice::<ApiError>(body) {
            Ok(api) => ExecutionError::Rejected {
                code: api.code,
                message: api.msg,
            },
            Err(_) => ExecutionError::InvalidResponse(format!(
                "HTTP {status}: {}",
                String::from_utf8_lossy(body)
            )),
        }
    }
}

#[async_trait]
impl OrderGateway for FuturesClient {
    async fn verify_connectivity(&self) -> Result<(), ExecutionError> {
        let url = format!(
            "{}{}?{}",
            self.base_url,
            ACCOUNT_PATH,
            self.signed_query(&[])
        );
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| ExecutionError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("credentials verified against the futures account endpoint");
            return Ok(());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ExecutionError::Network(e.to_string()))?;
        Err(match Self::rejection(status, &body) {
            ExecutionError::Rejected { code, message } => {
                ExecutionError::AuthFailed(format!("{message} (code {code})"))
            }
            other => other,
        })
    }

    async fn place_market_order(
        &self,
        symbol: &Symbol,
        side: Side,
        quantity: Decimal,
    ) -> Result<RawOrderResponse, ExecutionError> {
        info!(%symbol, side = side.as_str(), %quantity, "placing MARKET order");
        let raw = self.submit(&Self::market_params(symbol, side, quantity)).await?;
        debug!(?raw, "exchange response");
        Ok(raw)
    }

    async fn place_limit_order(
        &self,
        symbol: &Symbol,
        side: Side,
        quantity: Decimal,
        price: Decimal,
    ) -> Result<RawOrderResponse, ExecutionError> {
        info!(
            %symbol,
            side = side.as_str(),
            %quantity,
            %price,
            time_in_force = TIME_IN_FORCE_GTC,
            "placing LIMIT order"
        );
        let raw = self
            .submit(&Self::limit_params(symbol, side, quantity, price))
            .await?;
        debug!(?raw, "exchange response");
        Ok(raw)
    }

    fn exchange_name(&self) -> &'static str {
        "binance-futures-testnet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;
    use rust_decimal_macros::dec;

    fn test_client(secret: &str) -> FuturesClient {
        FuturesClient::new(&Settings {
            api_key: "test-key".into(),
            api_secret: secret.into(),
            base_url: "https://testnet.binancefuture.com/".into(),
            logging: LoggingConfig::default(),
        })
    }

    #[test]
    fn base_url_is_stripped_of_trailing_slash() {
        let client = test_client("secret");
        assert_eq!(client.base_url, "https://testnet.binancefuture.com");
    }

    #[test]
    fn signature_matches_the_documented_reference_vector() {
        // Key, payload and digest from the exchange's signed-endpoint
        // documentation example.
        let client =
            test_client("NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j");
        let payload = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";

        assert_eq!(
            client.sign(payload),
            "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71"
        );
    }

    #[test]
    fn signed_query_ends_with_a_signature() {
        let client = test_client("secret");
        let query = client.signed_query(&[("symbol", "BTCUSDT".into())]);

        assert!(query.starts_with("symbol=BTCUSDT&timestamp="));
        let signature = query.rsplit("&signature=").next().unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn market_params_omit_price_and_time_in_force() {
        let symbol = Symbol::parse("BTCUSDT").unwrap();
        let params = FuturesClient::market_params(&symbol, Side::Buy, dec!(0.001));

        assert_eq!(
            params,
            vec![
                ("symbol", "BTCUSDT".to_string()),
                ("side", "BUY".to_string()),
                ("type", "MARKET".to_string()),
                ("quantity", "0.001".to_string()),
            ]
        );
    }

    #[test]
    fn limit_params_carry_gtc_and_all_five_parameters() {
        let symbol = Symbol::parse("ETHUSDT").unwrap();
        let params =
            FuturesClient::limit_params(&symbol, Side::Sell, dec!(0.01), dec!(3500.50));

        assert_eq!(
            params,
            vec![
                ("symbol", "ETHUSDT".to_string()),
                ("side", "SELL".to_string()),
                ("type", "LIMIT".to_string()),
                ("timeInForce", "GTC".to_string()),
                ("quantity", "0.01".to_string()),
                ("price", "3500.50".to_string()),
            ]
        );
    }

    #[test]
    fn rejection_decodes_the_exchange_error_payload() {
        let err = FuturesClient::rejection(
            reqwest::StatusCode::BAD_REQUEST,
            br#"{"code":-2019,"msg":"Margin is insufficient."}"#,
        );

        assert!(matches!(
            err,
            ExecutionError::Rejected { code: -2019, ref message } if message == "Margin is insufficient."
        ));
    }

    #[test]
    fn rejection_falls_back_on_undecodable_bodies() {
        let err = FuturesClient::rejection(
            reqwest::StatusCode::BAD_GATEWAY,
            b"<html>bad gateway</html>",
        );

        assert!(matches!(err, ExecutionError::InvalidResponse(_)));
    }
}
