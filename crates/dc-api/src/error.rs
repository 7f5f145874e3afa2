use std::borrow::Cow;
use std::future::Future;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use dc_common::board::BoardError;

const MAX_MESSAGE_LEN: usize = 240;

tokio::task_local! {
    static REQUEST_ID: Option<String>;
}

/// Runs `fut` with the given request id visible to error responses built
/// inside it.
pub async fn with_request_id<F>(request_id: Option<String>, fut: F) -> F::Output
where
    F: Future,
{
    REQUEST_ID.scope(request_id, fut).await
}

fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|id| id.clone()).ok().flatten()
}

fn redact_token(token: &str) -> Cow<'_, str> {
    if token.contains("://") {
        return Cow::Borrowed("[redacted-url]");
    }
    if let Some((base, _query)) = token.split_once('?') {
        return if base.is_empty() {
            Cow::Borrowed("[redacted-query]")
        } else {
            Cow::Owned(format!("{base}?[redacted]"))
        };
    }
    if token.starts_with('/') || token.contains('\\') {
        return Cow::Borrowed("[redacted-path]");
    }
    Cow::Borrowed(token)
}

/// Strips anything from an error message that could leak infrastructure
/// details to a caller. URLs, querystrings and filesystem paths are replaced
/// wholesale rather than partially scrubbed.
fn sanitize_message(message: &str) -> String {
    let despecked: String = message
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    let mut out = String::new();
    for token in despecked.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&redact_token(token));
    }

    if out.len() > MAX_MESSAGE_LEN {
        let mut cut = MAX_MESSAGE_LEN;
        while !out.is_char_boundary(cut) {
            cut -= 1;
        }
        out.truncate(cut);
        out.push('…');
    }

    if out.is_empty() {
        "unexpected error".into()
    } else {
        out
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("rate limited: {0}")]
    TooManyRequests(String),

    #[error("unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::TooManyRequests(_) => (StatusCode::TOO_MANY_REQUESTS, "too_many_requests"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    pub fn code(&self) -> &'static str {
        self.parts().1
    }

    /// Message safe to return to callers. Internal errors collapse to a
    /// generic line; client errors are sanitized instead of hidden.
    fn public_message(&self) -> Cow<'_, str> {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                Cow::Owned(sanitize_message(msg))
            }
            ApiError::TooManyRequests(_) => Cow::Borrowed("too many requests"),
            ApiError::ServiceUnavailable(_) => Cow::Borrowed("service unavailable"),
            ApiError::Internal(_) => Cow::Borrowed("internal server error"),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.parts();
        let request_id = current_request_id();

        tracing::error!(
            code,
            status = status.as_u16(),
            request_id = request_id.as_deref().unwrap_or(""),
            error = %self,
            "api_error"
        );

        let body = ErrorResponse {
            code,
            message: self.public_message().into_owned(),
            request_id,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::MissingId => ApiError::BadRequest("posting id must not be empty".into()),
            BoardError::DuplicateId(id) => {
                ApiError::Conflict(format!("posting already exists: {id}"))
            }
            BoardError::NotFound(id) => ApiError::NotFound(format!("posting not found: {id}")),
            BoardError::ExternalPosting(id) => ApiError::Conflict(format!(
                "posting {id} accepts applications on its original listing only"
            )),
            BoardError::NotOpen(id) => ApiError::Conflict(format!("posting {id} is no longer open")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn sanitize_redacts_urls_paths_and_queries() {
        assert_eq!(
            sanitize_message("failed to reach http://10.0.0.1:5432/db"),
            "failed to reach [redacted-url]"
        );
        assert_eq!(
            sanitize_message("missing file /etc/devconnect/jobs.json"),
            "missing file [redacted-path]"
        );
        assert_eq!(
            sanitize_message("lookup id?token=abc failed"),
            "lookup id?[redacted] failed"
        );
        assert_eq!(sanitize_message(""), "unexpected error");
    }

    #[test]
    fn sanitize_caps_message_length() {
        let long = "x".repeat(600);
        let sanitized = sanitize_message(&long);
        assert!(sanitized.chars().count() <= MAX_MESSAGE_LEN + 1);
        assert!(sanitized.ends_with('…'));
    }

    #[tokio::test]
    async fn includes_request_id_in_response_body_when_present() {
        let response = with_request_id(Some("req-42".into()), async {
            ApiError::NotFound("posting not found: abc".into()).into_response()
        })
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["request_id"], "req-42");
    }

    #[tokio::test]
    async fn omits_request_id_outside_request_scope() {
        let response = ApiError::Internal("db exploded".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "internal server error");
        assert!(body.get("request_id").is_none());
    }

    #[test]
    fn board_errors_map_to_api_statuses() {
        let conflict: ApiError = BoardError::DuplicateId("j1".into()).into();
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let missing: ApiError = BoardError::NotFound("j2".into()).into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let external: ApiError = BoardError::ExternalPosting("j3".into()).into();
        assert_eq!(external.status_code(), StatusCode::CONFLICT);
    }
}
