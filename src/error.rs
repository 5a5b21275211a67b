use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::models::ALLOWED_MODELS;

// Everything a request can fail with. Each variant maps to one status code
// and renders as {"detail": <message>}.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authorization header missing")]
    MissingAuthorization,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Rate limit exceeded. Maximum {max_requests} requests per {window_seconds} seconds.")]
    RateLimited {
        max_requests: usize,
        window_seconds: u64,
    },

    #[error("Model '{model}' is not found in the list of models. Allowed models: {:?}", ALLOWED_MODELS)]
    UnknownModel { model: String },

    #[error("temperature must be between 0 and 2")]
    InvalidTemperature,

    // The upstream failure detail is logged server-side, never returned
    #[error("Failed to process request with OpenAI")]
    Upstream,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingAuthorization | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            Self::UnknownModel { .. } | Self::InvalidTemperature => StatusCode::BAD_REQUEST,
            Self::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(ApiError::MissingAuthorization.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::RateLimited { max_requests: 10, window_seconds: 60 }.status(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::UnknownModel { model: "x".to_string() }.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Upstream.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn rate_limited_message_echoes_configuration() {
        let err = ApiError::RateLimited { max_requests: 10, window_seconds: 60 };
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded. Maximum 10 requests per 60 seconds."
        );
    }

    #[test]
    fn unknown_model_message_enumerates_allow_list() {
        let err = ApiError::UnknownModel { model: "not-a-real-model".to_string() };
        let message = err.to_string();
        assert!(message.starts_with("Model 'not-a-real-model' is not found in the list of models."));
        for model in ALLOWED_MODELS {
            assert!(message.contains(model), "allow-list entry {model} missing");
        }
    }

    #[test]
    fn upstream_message_is_generic() {
        assert_eq!(ApiError::Upstream.to_string(), "Failed to process request with OpenAI");
    }
}
