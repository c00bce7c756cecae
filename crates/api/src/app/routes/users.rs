use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, patch, post, put},
};

use userhub_application::{CreateUserRequest, UpdateNicknameRequest};

use crate::app::services::SharedUserService;
use crate::app::{dto, errors};
use crate::config::ApiConfig;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/:user_id", get(get_user))
        .route("/:user_id/nickname", put(update_nickname))
        .route("/:user_id/attributes/:accessor", patch(update_attribute))
}

pub async fn create_user(
    Extension(services): Extension<SharedUserService>,
    Extension(config): Extension<Arc<ApiConfig>>,
    Json(body): Json<CreateUserRequest>,
) -> axum::response::Response {
    let created = match services.create_user(body) {
        Ok(u) => u,
        Err(e) => return errors::app_error_to_response(e),
    };

    let location = config.user_location(&created.user_id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(created)).into_response()
}

pub async fn get_user(
    Extension(services): Extension<SharedUserService>,
    Path(user_id): Path<String>,
) -> axum::response::Response {
    match services.get_user_by_id(&user_id) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn update_nickname(
    Extension(services): Extension<SharedUserService>,
    Path(user_id): Path<String>,
    Query(query): Query<dto::NicknameQuery>,
) -> axum::response::Response {
    match services.update_user_nickname(UpdateNicknameRequest::new(user_id, query.new_nickname)) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}

pub async fn update_attribute(
    Extension(services): Extension<SharedUserService>,
    Path((user_id, accessor)): Path<(String, String)>,
    Json(body): Json<dto::AttributeUpdateRequest>,
) -> axum::response::Response {
    match services.update_user_attribute(&user_id, &accessor, body.value) {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => errors::app_error_to_response(e),
    }
}
