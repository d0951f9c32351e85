use axum::response::{IntoResponse, Response};

use super::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    AppError::NotFound("The requested resource was not found".into()).into_response()
}
