//! Session lifecycle endpoint

use axum::{extract::State, Json};

use crate::server::state::AppState;
use crate::types::MessageResponse;

/// POST /end-session - clear the session corpus.
///
/// A no-op success when the corpus is already empty.
pub async fn end_session(State(state): State<AppState>) -> Json<MessageResponse> {
    state.corpus().clear();
    tracing::info!("Session ended, corpus cleared");
    Json(MessageResponse {
        message: "Session ended".to_string(),
    })
}
