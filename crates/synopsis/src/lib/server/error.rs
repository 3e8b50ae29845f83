use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::SummarizeError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("No text provided")]
    NoText,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Model not available")]
    ModelUnavailable,
    #[error("All summarization methods failed")]
    AllMethodsFailed,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NoText => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::AllMethodsFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SummarizeError> for ApiError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::EmptyInput => ApiError::NoText,
            SummarizeError::ModelUnavailable => ApiError::ModelUnavailable,
            SummarizeError::AllMethodsFailed => ApiError::AllMethodsFailed,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
