//! HTTP routes for the study session service

pub mod query;
pub mod session;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all routes
pub fn routes(max_body_size: usize) -> Router<AppState> {
    Router::new()
        // Ingestion - with a body limit sized for multipart uploads
        .route(
            "/upload",
            post(upload::upload_files).layer(DefaultBodyLimit::max(max_body_size)),
        )
        // Query surface
        .route("/summary", get(query::summary))
        .route("/questionnaire", get(query::questionnaire))
        .route("/chat", post(query::chat))
        // Session lifecycle
        .route("/end-session", post(session::end_session))
}
