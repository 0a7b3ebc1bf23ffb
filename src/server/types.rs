use crate::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Vec<&'static str>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Renders every [`Error`] as a stable machine-readable code. Internal
/// detail stays in the server log; the client only ever sees the code
/// string.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Error::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::InvalidApiKey => (StatusCode::UNAUTHORIZED, "INVALID_API_KEY".to_string()),
            Error::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED".to_string()),
            Error::OutOfCredits => (StatusCode::PAYMENT_REQUIRED, "OUT_OF_CREDITS".to_string()),
            Error::Upstream { .. } | Error::Network(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "API_ERROR".to_string())
            }
            Error::Config(_) | Error::Io(_) | Error::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "SERVER_ERROR".to_string())
            }
        };

        if status.is_server_error() {
            error!("request failed: {}", self);
        }

        (status, Json(ErrorResponse { error: code })).into_response()
    }
}
