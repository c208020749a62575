use axum::{
    extract::{Query, State},
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::page::{self, FormView};
use super::WebState;
use crate::domain::ExpertiseLevel;

/// Fields posted by the HTML form, also accepted as query parameters to
/// prefill it.
#[derive(Debug, Default, Deserialize)]
pub struct AskForm {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub expertise: Option<String>,
}

impl AskForm {
    fn expertise(&self) -> &str {
        self.expertise
            .as_deref()
            .unwrap_or(ExpertiseLevel::default().as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct AskBody {
    pub query: String,
    #[serde(default)]
    pub expertise: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskReply {
    pub response: String,
    pub ok: bool,
}

pub(super) async fn index(Query(form): Query<AskForm>) -> Html<String> {
    Html(page::render(&FormView {
        query: &form.query,
        expertise: form.expertise(),
        response: None,
    }))
}

pub(super) async fn ask_form(
    State(state): State<WebState>,
    Form(form): Form<AskForm>,
) -> Html<String> {
    debug!("Form submission (expertise={})", form.expertise());
    let outcome = state.assistant.ask(&form.query, form.expertise()).await;

    Html(page::render(&FormView {
        query: &form.query,
        expertise: form.expertise(),
        response: Some(outcome.text()),
    }))
}

/// JSON variant of the form. Always 200: a failure is still a displayable
/// string, flagged by `ok: false`.
pub(super) async fn ask_json(
    State(state): State<WebState>,
    Json(body): Json<AskBody>,
) -> Json<AskReply> {
    let expertise = body
        .expertise
        .as_deref()
        .unwrap_or(ExpertiseLevel::default().as_str());
    let outcome = state.assistant.ask(&body.query, expertise).await;

    Json(AskReply {
        ok: outcome.is_answer(),
        response: outcome.into_text(),
    })
}
