mod auth;
mod config;
mod error;
mod handlers;
mod metrics;
mod models;
mod rate_limit;
mod state;
mod upstream;

use axum::http::{HeaderValue, Method, header};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::auth::SupabaseAuthenticator;
use crate::config::{Args, Settings};
use crate::rate_limit::RateLimiter;
use crate::state::AppState;
use crate::upstream::OpenAiGateway;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // parse cli arguments and environment settings
    let args = Args::parse();
    let settings = Settings::from_env();

    // creating shared state
    let state = Arc::new(AppState {
        authenticator: Arc::new(SupabaseAuthenticator::new(
            settings.supabase_url.clone(),
            settings.supabase_anon_key.clone(),
        )),
        gateway: Arc::new(OpenAiGateway::from_env()),
        rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
    });

    // single allowed origin, credentials on
    let cors = CorsLayer::new()
        .allow_origin(
            settings
                .frontend_origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| panic!("FRONTEND_ORIGIN is not a valid origin")),
        )
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = handlers::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("Gateway running on http://localhost:{}", args.port);
    info!("Allowed CORS origin: {}", settings.frontend_origin);
    info!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );
    axum::serve(listener, app).await.unwrap();
}
