use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use calculus::SyntaxError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Syntax(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
