use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookdesk::config::AppConfig;
use bookdesk::handlers;
use bookdesk::services::api::rest::RestBookingApi;
use bookdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(api_base_url = %config.api_base_url, env = %config.environment, "booking backend configured");

    let api = RestBookingApi::new(config.api_base_url.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        api: Box::new(api),
        sessions: Mutex::new(HashMap::new()),
    });

    let app = Router::new()
        .route("/", get(handlers::pages::home_page))
        .route("/services", get(handlers::pages::services_page))
        .route("/booking", get(handlers::pages::booking_page))
        .route("/contact", get(handlers::pages::contact_page))
        .route("/privacy", get(handlers::pages::privacy_page))
        .route("/terms", get(handlers::pages::terms_page))
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::booking::list_services))
        .route("/api/slots", get(handlers::booking::list_slots))
        .route("/api/availability", get(handlers::booking::month_availability))
        .route("/api/booking/session", post(handlers::booking::create_session))
        .route("/api/booking/:id", get(handlers::booking::get_flow))
        .route("/api/booking/:id/submit", post(handlers::booking::submit))
        .route("/api/booking/:id/verify", post(handlers::booking::verify))
        .route("/api/booking/:id/resend", post(handlers::booking::resend))
        .route("/api/booking/:id/back", post(handlers::booking::back))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
