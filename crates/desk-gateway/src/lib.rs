//! HTTP gateway for marketdesk
//!
//! A small axum server that fronts two upstream services:
//!
//! - The Breeze Connect brokerage API (session auth, NSE cash-equity quotes,
//!   market depth), via [`desk_breeze::MarketDataProvider`]
//! - The Google Generative Language API (Nifty 50 market analysis), via
//!   [`desk_genai::TextGenerator`]
//!
//! Each route parses a JSON body, invokes exactly one upstream capability,
//! and relays the result or a typed error back as JSON. Routes are
//! independent and stateless; the only shared state is the pair of client
//! handles injected into the router at startup.
//!
//! # Routes
//!
//! | Method | Path | Upstream call |
//! |--------|------|---------------|
//! | POST | `/api/breeze/admin/api-session` | `generate_session` |
//! | POST | `/api/breeze/quotes` | `get_quotes` |
//! | POST | `/api/breeze/depth` | `get_market_depth` |
//! | POST | `/api/analyze_market` | `generate` |
//! | GET | `/health` | none |

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod prompts;
pub mod routes;
pub mod state;

// Re-export main types
pub use config::GatewayConfig;
pub use error::{AnalysisError, ApiError};
pub use routes::create_router;
pub use state::AppState;
