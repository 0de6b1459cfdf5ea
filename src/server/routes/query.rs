//! Query endpoints: summary, questionnaire, chat

use axum::{extract::State, Json};

use crate::error::Result;
use crate::query;
use crate::server::state::AppState;
use crate::types::{ChatRequest, ChatResponse, QuestionnaireResponse, SummaryResponse};

/// GET /summary - summarize the session corpus
pub async fn summary(State(state): State<AppState>) -> Result<Json<SummaryResponse>> {
    let summary = query::summarize(state.corpus(), state.generator()).await?;
    Ok(Json(SummaryResponse { summary }))
}

/// GET /questionnaire - generate a questionnaire from the session corpus
pub async fn questionnaire(State(state): State<AppState>) -> Result<Json<QuestionnaireResponse>> {
    let questionnaire = query::build_questionnaire(state.corpus(), state.generator()).await?;
    Ok(Json(QuestionnaireResponse { questionnaire }))
}

/// POST /chat - answer a question against the session corpus
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let answer =
        query::answer_question(state.corpus(), state.generator(), &request.question).await?;
    Ok(Json(ChatResponse { answer }))
}
