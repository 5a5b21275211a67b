use axum::http::HeaderMap;
use axum::{Json, extract::State};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

use crate::auth::bearer_token;
use crate::error::ApiError;
use crate::metrics::{
    AUTH_FAILURES, RATE_LIMITED, REQUEST_LATENCY, REQUEST_TOTAL, UPSTREAM_ERRORS,
};
use crate::models::{ALLOWED_MODELS, InvokeModelRequest, web_search_tool};
use crate::state::AppState;

// Auth -> rate limit -> model validation -> upstream call -> passthrough
pub async fn invoke_model_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<InvokeModelRequest>,
) -> Result<Json<Value>, ApiError> {
    REQUEST_TOTAL.inc();

    let token = bearer_token(&headers)?;
    let Some(identity) = state.authenticator.resolve_identity(token).await else {
        AUTH_FAILURES.inc();
        return Err(ApiError::InvalidToken);
    };

    if !state.rate_limiter.try_admit(&identity.subject, Instant::now()) {
        warn!("Rate limit exceeded for user {}", identity.email);
        RATE_LIMITED.inc();
        return Err(ApiError::RateLimited {
            max_requests: state.rate_limiter.max_requests(),
            window_seconds: state.rate_limiter.window_seconds(),
        });
    }

    info!(
        "Model request received from user {} - Model: {}, temperature: {}, web search: {}",
        identity.email, payload.model, payload.temperature, payload.web_search
    );

    if !ALLOWED_MODELS.contains(&payload.model.as_str()) {
        let err = ApiError::UnknownModel {
            model: payload.model,
        };
        error!("{err}");
        return Err(err);
    }

    if !(0.0..=2.0).contains(&payload.temperature) {
        return Err(ApiError::InvalidTemperature);
    }

    let tools = if payload.web_search {
        vec![web_search_tool()]
    } else {
        Vec::new()
    };

    info!("Making OpenAI API call with model: {}", payload.model);
    let start_time = Instant::now();
    let result = state
        .gateway
        .complete(&payload.model, &payload.prompt, &tools)
        .await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    match result {
        Ok(body) => {
            info!("OpenAI API call successful for model: {}", payload.model);
            Ok(Json(body))
        }
        Err(e) => {
            // Full detail stays in the server log, the caller gets a
            // generic message
            error!("OpenAI API call failed: {e}");
            UPSTREAM_ERRORS.inc();
            Err(ApiError::Upstream)
        }
    }
}
