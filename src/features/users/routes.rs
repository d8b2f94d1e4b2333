use crate::features::users::handlers::profile_handler;
use crate::features::users::services::UserService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users/me", get(profile_handler::get_profile))
        .route(
            "/api/users/me/session",
            post(profile_handler::record_session),
        )
        .with_state(service)
}
