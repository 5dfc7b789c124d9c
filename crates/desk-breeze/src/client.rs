//! Breeze Connect API client
//!
//! Thin wrapper over the vendor REST API at
//! `https://api.icicidirect.com/breezeapi/api/v1`. Authenticated calls carry
//! the vendor's per-request checksum headers (SHA-256 over timestamp, body,
//! and API secret).

use crate::error::{BreezeError, Result};
use crate::provider::MarketDataProvider;
use async_trait::async_trait;
use chrono::Utc;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

const BASE_URL: &str = "https://api.icicidirect.com/breezeapi/api/v1";

// Vendor limit is 100 requests per minute per app key.
const DEFAULT_RATE_LIMIT: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Equities-only scope: every market-data call is pinned to NSE cash.
const EXCHANGE_CODE: &str = "NSE";
const PRODUCT_TYPE: &str = "cash";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Customer session established by [`BreezeClient::generate_session`]
#[derive(Debug, Clone)]
pub struct BreezeSession {
    /// Customer token sent as `X-SessionToken` on market-data calls
    pub token: String,
}

/// Breeze Connect API client
///
/// Holds the app credentials and the customer session for the lifetime of
/// the process. The session slot is guarded by an `RwLock`: the daily
/// refresh takes the write lock while quote and depth calls read, so a
/// refresh cannot race in-flight reads.
#[derive(Debug, Clone)]
pub struct BreezeClient {
    client: Client,
    api_key: String,
    api_secret: String,
    session: Arc<RwLock<Option<BreezeSession>>>,
    rate_limiter: SharedRateLimiter,
}

impl BreezeClient {
    /// Create a new Breeze client with app credentials
    ///
    /// # Arguments
    /// * `api_key` - Breeze app key
    /// * `api_secret` - Breeze app secret used for request checksums
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let quota = Quota::per_minute(NonZeroU32::new(DEFAULT_RATE_LIMIT).unwrap_or(NonZeroU32::MIN));

        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            session: Arc::new(RwLock::new(None)),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Create from the `BREEZE_API_KEY` and `BREEZE_API_SECRET` environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("BREEZE_API_KEY").map_err(|_| {
            BreezeError::Config("BREEZE_API_KEY environment variable not set".to_string())
        })?;
        let api_secret = std::env::var("BREEZE_API_SECRET").map_err(|_| {
            BreezeError::Config("BREEZE_API_SECRET environment variable not set".to_string())
        })?;

        Self::new(api_key, api_secret)
    }

    /// Whether a customer session is currently held
    pub async fn has_session(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Signed GET against a market-data endpoint, returning the raw payload
    async fn signed_get(&self, endpoint: &str, body: &Value) -> Result<Value> {
        // Fail fast before burning a rate-limit slot.
        let token = {
            let session = self.session.read().await;
            session
                .as_ref()
                .ok_or(BreezeError::NotAuthenticated)?
                .token
                .clone()
        };

        self.rate_limiter.until_ready().await;

        let payload = body.to_string();
        let timestamp = request_timestamp();
        let checksum = checksum(&timestamp, &payload, &self.api_secret);

        let response = self
            .client
            .get(format!("{BASE_URL}/{endpoint}"))
            .header("Content-Type", "application/json")
            .header("X-Checksum", format!("token {checksum}"))
            .header("X-Timestamp", &timestamp)
            .header("X-AppKey", &self.api_key)
            .header("X-SessionToken", &token)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 429 {
                return Err(BreezeError::RateLimited);
            }
            let error_text = response.text().await.unwrap_or_default();
            return Err(BreezeError::Api(format!("HTTP {status}: {error_text}")));
        }

        // Vendor business errors travel inside the envelope and are relayed
        // to the caller as-is.
        let data: Value = response.json().await?;
        Ok(data)
    }
}

#[async_trait]
impl MarketDataProvider for BreezeClient {
    #[instrument(skip(self, session_token))]
    async fn generate_session(&self, session_token: &str) -> Result<()> {
        debug!("Requesting customer details for session generation");

        let body = json!({
            "SessionToken": session_token,
            "AppKey": self.api_key,
        });

        let response = self
            .client
            .get(format!("{BASE_URL}/customerdetails"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BreezeError::AuthenticationFailed(format!(
                "HTTP {status}: {error_text}"
            )));
        }

        let data: Value = response.json().await?;

        if let Some(error) = data.get("Error").filter(|e| !e.is_null()) {
            return Err(BreezeError::AuthenticationFailed(
                error.as_str().map_or_else(|| error.to_string(), String::from),
            ));
        }

        let token = data
            .pointer("/Success/session_token")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                BreezeError::UnexpectedResponse(
                    "customerdetails response missing session_token".to_string(),
                )
            })?;

        let mut session = self.session.write().await;
        *session = Some(BreezeSession {
            token: token.to_string(),
        });

        debug!("Breeze session established");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_quotes(&self, stock_code: &str) -> Result<Value> {
        self.signed_get("quotes", &quote_body(stock_code)).await
    }

    #[instrument(skip(self))]
    async fn get_market_depth(&self, stock_code: &str) -> Result<Value> {
        self.signed_get("marketdepth", &depth_body(stock_code)).await
    }

    fn name(&self) -> &'static str {
        "breeze"
    }
}

/// Request body for the `quotes` endpoint
///
/// Expiry, right, and strike are sent empty: derivatives are out of scope.
fn quote_body(stock_code: &str) -> Value {
    json!({
        "stock_code": stock_code,
        "exchange_code": EXCHANGE_CODE,
        "expiry_date": "",
        "product_type": PRODUCT_TYPE,
        "right": "",
        "strike_price": "",
    })
}

/// Request body for the `marketdepth` endpoint
fn depth_body(stock_code: &str) -> Value {
    json!({
        "stock_code": stock_code,
        "exchange_code": EXCHANGE_CODE,
        "product_type": PRODUCT_TYPE,
    })
}

/// UTC timestamp in the vendor's checksum format
fn request_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

/// Vendor request checksum: SHA-256 over timestamp, body, and secret
fn checksum(timestamp: &str, payload: &str, secret: &str) -> String {
    let digest = Sha256::digest(format!("{timestamp}{payload}{secret}"));
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BreezeClient::new("test_key", "test_secret").unwrap();
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.name(), "breeze");
    }

    #[test]
    fn test_quote_body_pins_market_params() {
        let body = quote_body("NIFTY");
        assert_eq!(body["stock_code"], "NIFTY");
        assert_eq!(body["exchange_code"], "NSE");
        assert_eq!(body["product_type"], "cash");
        assert_eq!(body["expiry_date"], "");
        assert_eq!(body["right"], "");
        assert_eq!(body["strike_price"], "");
    }

    #[test]
    fn test_depth_body_pins_market_params() {
        let body = depth_body("RELIANCE");
        assert_eq!(body["stock_code"], "RELIANCE");
        assert_eq!(body["exchange_code"], "NSE");
        assert_eq!(body["product_type"], "cash");
        assert!(body.get("expiry_date").is_none());
    }

    #[test]
    fn test_checksum_is_hex_sha256() {
        let sum = checksum("2024-01-01T00:00:00.000Z", "{}", "secret");
        assert_eq!(sum.len(), 64);
        assert!(sum.chars().all(|c| c.is_ascii_hexdigit()));
        // Deterministic for identical inputs
        assert_eq!(sum, checksum("2024-01-01T00:00:00.000Z", "{}", "secret"));
        // Sensitive to the secret
        assert_ne!(sum, checksum("2024-01-01T00:00:00.000Z", "{}", "other"));
    }

    #[test]
    fn test_request_timestamp_format() {
        let ts = request_timestamp();
        assert!(ts.ends_with(".000Z"));
        assert_eq!(ts.len(), "2024-01-01T00:00:00.000Z".len());
    }

    #[tokio::test]
    async fn test_market_calls_require_session() {
        let client = BreezeClient::new("test_key", "test_secret").unwrap();
        assert!(!client.has_session().await);

        let err = client.get_quotes("NIFTY").await.unwrap_err();
        assert!(matches!(err, BreezeError::NotAuthenticated));

        let err = client.get_market_depth("NIFTY").await.unwrap_err();
        assert!(matches!(err, BreezeError::NotAuthenticated));
    }

    #[test]
    fn test_from_env_without_credentials() {
        // SAFETY: test-only env mutation
        unsafe {
            std::env::remove_var("BREEZE_API_KEY");
            std::env::remove_var("BREEZE_API_SECRET");
        }
        let result = BreezeClient::from_env();
        assert!(matches!(result, Err(BreezeError::Config(_))));
    }
}
