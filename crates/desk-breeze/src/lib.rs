//! Breeze Connect brokerage API client for marketdesk
//!
//! This crate wraps the ICICI Direct Breeze Connect REST API. It covers the
//! three capabilities the gateway relays:
//!
//! - Daily session authentication (`customerdetails`)
//! - Real-time equity quotes (`quotes`)
//! - Order-book market depth (`marketdepth`)
//!
//! The client holds the app credentials and the customer session token for
//! the lifetime of the process. Market-data calls are pinned to NSE cash
//! equities; quote and depth payloads are relayed as raw JSON rather than
//! re-modelled, since callers pass them through unmodified.
//!
//! # Example
//!
//! ```rust,ignore
//! use desk_breeze::{BreezeClient, MarketDataProvider};
//!
//! #[tokio::main]
//! async fn main() -> desk_breeze::Result<()> {
//!     let client = BreezeClient::from_env()?;
//!     client.generate_session("daily-session-token").await?;
//!     let quote = client.get_quotes("NIFTY").await?;
//!     println!("{quote}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod provider;

// Re-export main types
pub use client::{BreezeClient, BreezeSession};
pub use error::{BreezeError, Result};
pub use provider::MarketDataProvider;
