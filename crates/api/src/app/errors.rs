use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use userhub_application::AppError;
use userhub_core::DomainError;
use userhub_users::RepositoryError;

pub fn app_error_to_response(err: AppError) -> axum::response::Response {
    match err {
        AppError::Repository(RepositoryError::NotFound(id)) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("user not found: {id}"))
        }
        AppError::Repository(RepositoryError::Storage(msg)) => {
            tracing::error!(error = %msg, "storage failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "storage_error", msg)
        }
        AppError::Domain(DomainError::InvalidId(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_id", msg)
        }
        AppError::Domain(e @ DomainError::FieldNotFound(_)) => {
            json_error(StatusCode::BAD_REQUEST, "field_not_found", e.to_string())
        }
        AppError::Domain(e @ DomainError::ImmutableField(_)) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "immutable_field", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
