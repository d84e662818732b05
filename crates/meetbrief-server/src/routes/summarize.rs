//! Transcript summarization endpoint.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::error;

use crate::state::AppState;

/// Long meetings exceed axum's 2 MB default.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/summarize", post(summarize))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

#[derive(Debug, Default, Deserialize)]
struct SummarizeRequest {
    #[serde(default)]
    transcript: Option<String>,
}

/// An empty body reads as `{}`; anything else must be a JSON object.
fn parse_request(body: &[u8]) -> serde_json::Result<SummarizeRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SummarizeRequest::default());
    }
    serde_json::from_slice(body)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// POST /summarize: `{transcript}` in, brief out.
async fn summarize(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let request = match parse_request(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("Unreadable summarize request: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };
    let transcript = request.transcript.unwrap_or_default();

    let outcome =
        tokio::task::spawn_blocking(move || state.orchestrator.brief(&transcript)).await;

    match outcome {
        Ok(Ok(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(Err(e)) if e.is_invalid_input() => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Ok(Err(e)) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        Err(e) => {
            error!("Summarize task failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        assert_eq!(parse_request(b"").unwrap().transcript, None);
        assert_eq!(parse_request(b" \n").unwrap().transcript, None);
        assert_eq!(parse_request(b"{}").unwrap().transcript, None);
        assert_eq!(parse_request(br#"{"transcript": null}"#).unwrap().transcript, None);
        assert_eq!(
            parse_request(br#"{"transcript": "hi", "extra": 1}"#)
                .unwrap()
                .transcript
                .as_deref(),
            Some("hi")
        );
        assert!(parse_request(b"{not json").is_err());
        assert!(parse_request(br#"{"transcript": 42}"#).is_err());
        assert!(parse_request(b"[]").is_err());
    }
}
