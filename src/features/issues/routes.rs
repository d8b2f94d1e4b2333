use crate::features::issues::dtos::MAX_PHOTO_SIZE;
use crate::features::issues::handlers::{issue_handler, photo_handler};
use crate::features::issues::services::{IssueService, PhotoService};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Multipart overhead on top of the photo itself
const PHOTO_BODY_LIMIT: usize = MAX_PHOTO_SIZE + 1024 * 1024;

/// Protected issue routes (require JWT authentication)
pub fn routes(issue_service: Arc<IssueService>, photo_service: Arc<PhotoService>) -> Router {
    let issue_routes = Router::new()
        .route(
            "/api/issues",
            get(issue_handler::list_issues).post(issue_handler::create_issue),
        )
        .route("/api/issues/mine", get(issue_handler::list_my_issues))
        .route("/api/issues/queue", get(issue_handler::get_queue))
        .route(
            "/api/issues/{id}",
            get(issue_handler::get_issue).patch(issue_handler::update_issue),
        )
        .route(
            "/api/issues/{id}/updates",
            post(issue_handler::add_issue_update),
        )
        .with_state(issue_service);

    let photo_routes = Router::new()
        .route(
            "/api/issues/photos",
            post(photo_handler::upload_photo).layer(DefaultBodyLimit::max(PHOTO_BODY_LIMIT)),
        )
        .with_state(photo_service);

    issue_routes.merge(photo_routes)
}

/// Public issue routes
pub fn public_routes(issue_service: Arc<IssueService>) -> Router {
    Router::new()
        .route("/api/issues/stats", get(issue_handler::get_stats))
        .with_state(issue_service)
}
