//! HTTP API over the chat service.

use crate::{
    Chat, ChatErrorKind, ChatService, RenderedTurn, SlideDeck, SlidecastError, SlidecastErrorKind,
    Suggestion, suggestions,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Body of a question.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AskBody {
    /// The question
    pub question: String,
}

/// Reply to a question.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AskReply {
    /// Chat the turn was recorded in
    pub chat_id: i64,
    /// Chat title
    pub title: String,
    /// The generated deck
    pub deck: SlideDeck,
}

/// Error body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorBody {
    /// Message safe to show a user
    pub error: String,
}

/// A [`SlidecastError`] mapped to a status code.
#[derive(Debug)]
pub struct ApiError(SlidecastError);

impl From<SlidecastError> for ApiError {
    fn from(err: SlidecastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.kind() {
            SlidecastErrorKind::Chat(e) => match &e.kind {
                ChatErrorKind::EmptyQuestion => (StatusCode::BAD_REQUEST, e.kind.to_string()),
                ChatErrorKind::ChatNotFound(_) => (StatusCode::NOT_FOUND, e.kind.to_string()),
            },
            SlidecastErrorKind::Provider(_)
            | SlidecastErrorKind::Http(_)
            | SlidecastErrorKind::Generation(_)
            | SlidecastErrorKind::Deck(_) => (
                StatusCode::BAD_GATEWAY,
                "Could not generate a presentation for this question".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error".to_string(),
            ),
        };
        tracing::error!(status = status.as_u16(), error = %self.0, "Request failed");
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Routes for the Slidecast API.
pub fn router(service: ChatService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/suggestions", get(list_suggestions))
        .route("/chats", get(list_chats).post(ask_new))
        .route("/chats/:id/messages", get(transcript).post(ask_existing))
        .with_state(service)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_suggestions() -> Json<Vec<Suggestion>> {
    Json(suggestions())
}

async fn list_chats(State(service): State<ChatService>) -> Result<Json<Vec<Chat>>, ApiError> {
    Ok(Json(service.list_chats().await?))
}

async fn transcript(
    State(service): State<ChatService>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<RenderedTurn>>, ApiError> {
    Ok(Json(service.transcript(id).await?))
}

async fn ask_new(
    State(service): State<ChatService>,
    Json(body): Json<AskBody>,
) -> Result<Json<AskReply>, ApiError> {
    ask(&service, None, &body.question).await
}

async fn ask_existing(
    State(service): State<ChatService>,
    Path(id): Path<i64>,
    Json(body): Json<AskBody>,
) -> Result<Json<AskReply>, ApiError> {
    ask(&service, Some(id), &body.question).await
}

async fn ask(
    service: &ChatService,
    chat_id: Option<i64>,
    question: &str,
) -> Result<Json<AskReply>, ApiError> {
    let answer = service.ask(chat_id, question).await?;
    Ok(Json(AskReply {
        chat_id: answer.chat().id,
        title: answer.chat().display_title(),
        deck: answer.deck().clone(),
    }))
}
