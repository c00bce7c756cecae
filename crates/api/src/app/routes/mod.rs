use axum::Router;

pub mod system;
pub mod users;

/// Router for all versioned API endpoints.
pub fn router() -> Router {
    Router::new().nest("/api/v1/users", users::router())
}
