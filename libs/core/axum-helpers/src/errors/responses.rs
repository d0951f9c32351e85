//! Reusable OpenAPI response types for `#[utoipa::path]` annotations.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed JSON body",
    content_type = "text/plain",
    example = json!("Failed to parse the request body as JSON: expected value at line 1 column 1")
)]
pub struct BadRequestJsonResponse(pub String);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid path parameter",
    content_type = "text/plain",
    example = json!("Invalid URL: Cannot parse `abc` to a `i64`")
)]
pub struct BadRequestPathResponse(pub String);
