//! HTTP surface: multipart JPEG upload in, text report out.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::{info, warn};

use crate::analyze::analyze_jpeg;
use crate::report::format_report;
use crate::types::VisionConfig;

/// Uploads above this limit are rejected before analysis.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// State shared by all routes.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub vision: Arc<VisionConfig>,
}

impl AppState {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            vision: Arc::new(config),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/upload", post(upload))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /upload — validate one multipart JPEG, analyze it, return the report.
async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "Missing form field 'file'" }),
                );
            }
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    json!({ "error": format!("Malformed multipart body: {}", e) }),
                );
            }
        };

        if field.name() != Some("file") {
            continue;
        }

        // Copy the metadata out before `bytes` consumes the field.
        let filename = field.file_name().unwrap_or("").to_string();
        let declared = field.content_type().unwrap_or("").to_string();

        if filename.is_empty() {
            return error_response(
                StatusCode::BAD_REQUEST,
                json!({ "error": "No file selected" }),
            );
        }

        if !declared.eq_ignore_ascii_case("image/jpeg") {
            return error_response(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                json!({ "error": "Only image/jpeg is accepted", "got": declared }),
            );
        }

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                return error_response(
                    StatusCode::BAD_REQUEST,
                    json!({ "error": format!("Failed to read upload: {}", e) }),
                );
            }
        };

        if data.is_empty() {
            return error_response(StatusCode::BAD_REQUEST, json!({ "error": "Empty upload" }));
        }

        info!(bytes = data.len(), filename = %filename, "Analyzing uploaded JPEG");

        return match analyze_jpeg(&state.http, &state.vision, &data).await {
            Ok(result) => (StatusCode::OK, format_report(&result)).into_response(),
            Err(e) => {
                warn!(error = %e, "Analysis failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("ERROR analyzing image:\n{}", e),
                )
                    .into_response()
            }
        };
    }
}

fn error_response(status: StatusCode, body: serde_json::Value) -> Response {
    (status, Json(body)).into_response()
}
