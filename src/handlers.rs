use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use log::debug;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::types::{DefaultRequest, DefaultResponse, HealthResponse};

// The body is parsed so malformed JSON is rejected, then ignored.
pub async fn post_default_response(
    ApiJson(_request): ApiJson<DefaultRequest>,
) -> Json<DefaultResponse> {
    let response = DefaultResponse::success();
    debug!("Generated response {}", response.uuid);
    Json(response)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn not_found(method: Method, uri: Uri) -> AppError {
    log::warn!("No route for {} {}", method, uri.path());
    AppError::new(
        StatusCode::NOT_FOUND,
        format!("no route for {} {}", method, uri.path()),
    )
}
