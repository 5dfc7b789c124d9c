//! Prompt template for the market-analysis route

/// Build the Nifty 50 analysis prompt for a trading date
///
/// A single fixed template with the date interpolated; the completion is a
/// plain prompt with no tool or retrieval wiring.
pub fn market_analysis_prompt(log_date: &str) -> String {
    format!(
        "Analyze Nifty 50 for {log_date}. Summarize the index's intraday \
         movement, notable sector rotation, and the top gaining and losing \
         constituents for that session. Close with a short outlook for the \
         next trading day. Keep the analysis factual and concise."
    )
}
