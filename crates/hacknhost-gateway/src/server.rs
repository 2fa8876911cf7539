//! HTTP server implementation using Axum.

use axum::{
    Router,
    routing::{get, post},
};
use hacknhost_chat::{Matcher, strategy_for};
use hacknhost_core::HacknHostError;
use hacknhost_core::config::HacknHostConfig;
use hacknhost_knowledge::KnowledgeBase;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
pub struct AppState {
    /// Stateless resolver shared by every request.
    pub matcher: Matcher,
    pub start_time: std::time::Instant,
}

impl AppState {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            start_time: std::time::Instant::now(),
        }
    }

    /// Build the knowledge base and matcher described by the config.
    pub fn from_config(config: &HacknHostConfig) -> hacknhost_core::Result<Self> {
        let knowledge = Arc::new(KnowledgeBase::from_config(&config.knowledge)?);
        let matcher = Matcher::with_scorer(knowledge, strategy_for(config.chat.scoring));
        Ok(Self::new(matcher))
    }
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    build_router_from_arc(Arc::new(state))
}

pub fn build_router_from_arc(shared: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(super::routes::health_check))
        .route("/api/chat", post(super::routes::chat))
        .route("/api/chat/info", get(super::routes::chat_info))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}

fn cors_layer() -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    // Example: HACKNHOST_CORS_ORIGINS=https://hacknhost.com,https://app.hacknhost.com
    if let Ok(origins_str) = std::env::var("HACKNHOST_CORS_ORIGINS") {
        let origins: Vec<_> = origins_str
            .split(',')
            .filter_map(|s| s.trim().parse::<axum::http::HeaderValue>().ok())
            .collect();
        cors.allow_origin(origins)
    } else {
        cors.allow_origin(Any)
    }
}

/// Start the HTTP server and run until Ctrl+C.
pub async fn start(config: &HacknHostConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    tracing::info!(
        "📚 Knowledge base ready: {} entries, scorer={}",
        state.matcher.knowledge().len(),
        state.matcher.scorer_name()
    );

    let app = build_router(state);
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HacknHostError::Gateway(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("🌐 Gateway server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Gateway server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
