//! Market-data provider trait definition

use crate::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for brokerage market-data providers
///
/// The gateway talks to the brokerage through this trait so handlers can be
/// exercised against stub implementations. [`crate::BreezeClient`] is the
/// production implementation.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Authenticate with the daily session token
    ///
    /// Establishes the customer session used by every subsequent
    /// market-data call. Vendor session tokens expire daily, so callers
    /// re-invoke this to refresh.
    async fn generate_session(&self, session_token: &str) -> Result<()>;

    /// Fetch the real-time quote for an NSE cash-equity stock code
    ///
    /// Returns the vendor payload verbatim.
    async fn get_quotes(&self, stock_code: &str) -> Result<Value>;

    /// Fetch the order-book depth snapshot for an NSE cash-equity stock code
    ///
    /// Returns the vendor payload verbatim.
    async fn get_market_depth(&self, stock_code: &str) -> Result<Value>;

    /// Get the provider name (e.g., "breeze")
    fn name(&self) -> &str;
}
