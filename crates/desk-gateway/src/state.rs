//! Shared application state
//!
//! The two upstream clients are constructed once in `main` and injected
//! here, so handlers never reach for process-wide singletons and tests can
//! swap in stubs.

use desk_breeze::MarketDataProvider;
use desk_genai::TextGenerator;
use std::sync::Arc;

/// Application state shared by all routes
#[derive(Clone)]
pub struct AppState {
    /// Brokerage market-data client
    pub market: Arc<dyn MarketDataProvider>,

    /// Generative-text client
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Create application state from the two client handles
    pub fn new(market: Arc<dyn MarketDataProvider>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { market, generator }
    }
}
