pub mod handlers;
pub mod types;

use crate::{Result, backend::HttpBackend, config::Config};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat/analytics/:session_id", get(handlers::chat_analytics))
        .route("/api/chat/rag", post(handlers::rag_chat))
        .route("/api/chat/suggestions", post(handlers::chat_suggestions))
        .route("/api/test-backend", get(handlers::test_backend))
        .route("/api/test-chat", post(handlers::test_chat))
        .fallback(handlers::not_found)
        // Body size is left to the backend; handlers read raw bytes.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let backend = HttpBackend::new(config.backend.clone());
    info!("Proxying to backend at {}", backend.base_url());

    let app = router(AppState {
        backend: Arc::new(backend),
    });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
