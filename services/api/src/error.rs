use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use prospect_common::error::ProspectError;

pub struct ApiError(pub ProspectError);

impl From<ProspectError> for ApiError {
    fn from(err: ProspectError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ProspectError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ProspectError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
