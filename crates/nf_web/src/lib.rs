use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/feed", get(handlers::feed))
        .route("/api/tags", get(handlers::list_tags))
        .route("/api/articles/:id", get(handlers::get_article))
        .route("/api/articles/:id/comments", get(handlers::get_comments))
        .route("/api/classify", post(handlers::classify))
        .route("/api/analyze", post(handlers::analyze))
        .route("/api/submissions", post(handlers::create_submission))
        .route("/api/votes", post(handlers::vote))
        .route("/api/users/:id", get(handlers::get_profile))
        .route("/api/users/:id/posts", get(handlers::get_user_posts))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds `addr` and serves the app until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> nf_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use nf_core::{Article, Error, Result};
}
