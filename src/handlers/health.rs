use axum::Json;
use axum::response::IntoResponse;
use tracing::info;

// Health handler - no auth required
pub async fn health_handler() -> impl IntoResponse {
    info!("Health check requested");
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
