use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response rendered as `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub status: StatusCode,
    pub detail: String,
}

#[derive(Serialize)]
struct DetailBody<'a> {
    detail: &'a str,
}

impl ErrorDetail {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ErrorDetail {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(DetailBody {
                detail: &self.detail,
            }),
        )
            .into_response()
    }
}
