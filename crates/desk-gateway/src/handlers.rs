//! Route handlers
//!
//! Each handler extracts the named fields from the JSON body, invokes
//! exactly one upstream capability, and relays the result. Required fields
//! are checked up front so a missing `stock_code` surfaces as a 400 rather
//! than whatever the upstream would do with an empty value.

use crate::error::{AnalysisError, ApiError};
use crate::prompts;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use chrono::NaiveDate;
use desk_genai::GenerationRequest;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

/// Body for the session route
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    /// Daily Breeze session token
    pub api_session: Option<String>,
}

/// Body for the quote and depth routes
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// NSE stock code, e.g. `NIFTY` or `RELIANCE`
    pub stock_code: Option<String>,
}

/// Body for the analysis route
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    /// Trading date to analyze, `YYYY-MM-DD`
    pub log_date: Option<String>,
}

/// Success body for the session route
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    status: &'static str,
    message: &'static str,
}

/// Success body for the analysis route
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    /// Model output, relayed verbatim
    pub text: String,
}

/// POST `/api/breeze/admin/api-session`
///
/// Authenticates the shared brokerage client with the daily session token.
/// Any upstream failure maps to 400 with the error text; renewal is
/// triggered externally by calling this route again.
pub async fn set_session(
    State(state): State<AppState>,
    Json(body): Json<SessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let token = required_field(body.api_session, "api_session")?;

    state.market.generate_session(&token).await.map_err(|e| {
        warn!(error = %e, "session generation failed");
        ApiError::UpstreamAuth(e.to_string())
    })?;

    info!("brokerage session generated");
    Ok(Json(SessionResponse {
        status: "success",
        message: "Session generated",
    }))
}

/// POST `/api/breeze/quotes`
///
/// Relays the real-time quote payload for an NSE cash-equity stock code.
pub async fn get_quotes(
    State(state): State<AppState>,
    Json(body): Json<QuoteRequest>,
) -> Result<Json<Value>, ApiError> {
    let stock_code = required_field(body.stock_code, "stock_code")?;

    let payload = state.market.get_quotes(&stock_code).await.inspect_err(|e| {
        warn!(%stock_code, error = %e, "quote lookup failed");
    })?;

    debug!(%stock_code, "quote relayed");
    Ok(Json(payload))
}

/// POST `/api/breeze/depth`
///
/// Relays the order-book depth snapshot for an NSE cash-equity stock code.
pub async fn get_depth(
    State(state): State<AppState>,
    Json(body): Json<QuoteRequest>,
) -> Result<Json<Value>, ApiError> {
    let stock_code = required_field(body.stock_code, "stock_code")?;

    let payload = state
        .market
        .get_market_depth(&stock_code)
        .await
        .inspect_err(|e| {
            warn!(%stock_code, error = %e, "depth lookup failed");
        })?;

    debug!(%stock_code, "depth relayed");
    Ok(Json(payload))
}

/// POST `/api/analyze_market`
///
/// Builds the fixed Nifty 50 prompt for the given date and relays a single
/// non-streamed completion as `{"text": ...}`.
pub async fn analyze_market(
    State(state): State<AppState>,
    Json(body): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AnalysisError> {
    let log_date = required_field(body.log_date, "log_date").map_err(AnalysisError)?;

    if NaiveDate::parse_from_str(&log_date, "%Y-%m-%d").is_err() {
        return Err(AnalysisError(ApiError::Validation(
            "log_date must be YYYY-MM-DD".to_string(),
        )));
    }

    let request = GenerationRequest::new(prompts::market_analysis_prompt(&log_date));
    let response = state.generator.generate(request).await.map_err(|e| {
        warn!(%log_date, error = %e, "market analysis failed");
        AnalysisError::from(e)
    })?;

    debug!(%log_date, "analysis relayed");
    Ok(Json(AnalysisResponse {
        text: response.text,
    }))
}

/// GET `/health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Reject missing or blank required fields with a validation error
fn required_field(value: Option<String>, name: &str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ApiError::Validation(format!("{name} is required"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field() {
        assert_eq!(
            required_field(Some("NIFTY".to_string()), "stock_code").unwrap(),
            "NIFTY"
        );

        let err = required_field(None, "stock_code").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "stock_code is required");

        let err = required_field(Some("   ".to_string()), "stock_code").unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_request_bodies_tolerate_missing_fields() {
        let body: QuoteRequest = serde_json::from_str("{}").unwrap();
        assert!(body.stock_code.is_none());

        let body: SessionRequest = serde_json::from_str(r#"{"api_session":"tok"}"#).unwrap();
        assert_eq!(body.api_session.as_deref(), Some("tok"));
    }
}
