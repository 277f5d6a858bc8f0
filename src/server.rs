//! HTTP chat endpoint for the tavern keeper.
//!
//! - `POST /chat` with `{"message": "..."}` returns `{"response": "..."}`
//! - `GET /health` returns the service status and version
//!
//! All requests share one conversation history, so the keeper remembers
//! earlier patrons' questions until the process restarts.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rig::{
    agent::Agent,
    completion::{Message, Prompt},
    providers::anthropic::completion::CompletionModel,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::agent::MAX_TOOL_TURNS;

/// Shared state for the chat routes.
pub struct ChatState {
    keeper: Agent<CompletionModel>,
    history: Mutex<Vec<Message>>,
}

impl ChatState {
    pub fn new(keeper: Agent<CompletionModel>) -> Self {
        Self {
            keeper,
            history: Mutex::new(Vec::new()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// Failures surfaced to HTTP clients as `{"error": "..."}`.
#[derive(Debug)]
pub enum ChatError {
    EmptyMessage,
    Agent(String),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ChatError::EmptyMessage => (
                StatusCode::BAD_REQUEST,
                "message must not be empty".to_string(),
            ),
            ChatError::Agent(e) => (StatusCode::BAD_GATEWAY, e),
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Build the chat router.
pub fn router(state: Arc<ChatState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: &str, state: Arc<ChatState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Chat server listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down chat server");
        })
        .await?;
    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn chat_handler(
    State(state): State<Arc<ChatState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    let mut history = state.history.lock().await;
    let prompt = state
        .keeper
        .prompt(message)
        .multi_turn(MAX_TOOL_TURNS)
        .with_history(&mut *history);
    match prompt.await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(e) => {
            warn!(error = %e, "Agent prompt failed");
            Err(ChatError::Agent(e.to_string()))
        }
    }
}
