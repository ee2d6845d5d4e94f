/**
 * Error Conversion
 *
 * Converts `ApiError` values into HTTP responses so handlers can return
 * them directly with `?`.
 *
 * # Response Format
 *
 * Every error renders as a JSON object with a single field:
 *
 * ```json
 * {
 *   "error": "Invalid email or password"
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error served to client: {}", message);
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
