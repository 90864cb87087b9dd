use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::Html,
};
use serde::Deserialize;
use tracing::info;

use crate::page;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionForm {
    pub question: String,
    pub email: String,
}

pub async fn index() -> Html<String> {
    Html(page::render(None).into_string())
}

pub async fn ask(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QuestionForm>,
) -> Html<String> {
    info!(
        "SERVER: Question from {}: {}...",
        form.email,
        form.question.chars().take(50).collect::<String>()
    );

    let outcome = state
        .orchestrator
        .handle_question(&form.question, &form.email)
        .await;

    Html(page::render(Some(&outcome)).into_string())
}

pub async fn health() -> &'static str {
    "OK"
}
