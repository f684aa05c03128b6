//! HTTP server for the interactive question-answering page.
//!
//! Serves a single embedded HTML page plus a small JSON API:
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/` | The question page (textarea, status, rendered answer) |
//! | `POST` | `/ask` | Answer a question: `{ "question": "..." }` |
//! | `GET`  | `/sources` | List corpus files with char counts |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! Error responses use the schema:
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "question must not be empty" } }
//! ```
//!
//! Error codes: `bad_request` (400), `inference_error` (502), `internal` (500).
//!
//! The inference client is constructed once at startup, so a missing API key
//! kills the process before the first request instead of failing mid-session.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::ask;
use crate::config::Config;
use crate::corpus;
use crate::llm::GenerateClient;
use crate::models::CorpusFile;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    client: Arc<GenerateClient>,
}

/// Starts the HTTP server on the configured bind address.
///
/// Fails fast if the inference client cannot be constructed (missing
/// `GEMINI_API_KEY`) or if the bind address is unavailable.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let client = GenerateClient::from_config(&config.model)?;

    let state = AppState {
        config: Arc::new(config.clone()),
        client: Arc::new(client),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let bind_addr = &config.server.bind;
    println!(
        "docqa listening on http://{} (model {})",
        bind_addr,
        state.client.model_name()
    );

    let app = Router::new()
        .route("/", get(handle_index))
        .route("/ask", post(handle_ask))
        .route("/sources", get(handle_sources))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

fn inference_error(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_GATEWAY,
        code: "inference_error".to_string(),
        message: message.into(),
    }
}

fn internal(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: message.into(),
    }
}

/// Maps pipeline errors to the most appropriate HTTP status. Validation errors
/// become 400; anything from the remote endpoint becomes 502 with the raw
/// error text preserved for display.
fn classify_ask_error(err: anyhow::Error) -> AppError {
    let msg = err.to_string();
    if msg.contains("must not be empty") {
        bad_request(msg)
    } else if msg.contains("Inference API error") || msg.contains("error sending request") {
        inference_error(msg)
    } else {
        internal(msg)
    }
}

// ============ GET / ============

const INDEX_HTML: &str = include_str!("page.html");

async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// ============ POST /ask ============

#[derive(Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
    /// Omitted when `[server].show_sources = false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    sources: Option<Vec<CorpusFile>>,
    truncated: bool,
}

async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    // Reject before any file or network I/O.
    if request.question.trim().is_empty() {
        return Err(bad_request("question must not be empty"));
    }

    let answer = ask::answer(&state.client, &state.config, &request.question)
        .await
        .map_err(classify_ask_error)?;

    let sources = state.config.server.show_sources.then_some(answer.sources);

    Ok(Json(AskResponse {
        answer: answer.text,
        sources,
        truncated: answer.truncated,
    }))
}

// ============ GET /sources ============

#[derive(Serialize)]
struct SourcesResponse {
    files: Vec<CorpusFile>,
    truncated: bool,
}

async fn handle_sources(State(state): State<AppState>) -> Result<Json<SourcesResponse>, AppError> {
    let corpus = corpus::load_corpus(&state.config.documents).map_err(|e| internal(e.to_string()))?;
    Ok(Json(SourcesResponse {
        files: corpus.files,
        truncated: corpus.truncated,
    }))
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
