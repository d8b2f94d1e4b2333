use crate::features::helplines::handlers::helpline_handler;
use axum::{routing::get, Router};

/// Public helpline routes
pub fn routes() -> Router {
    Router::new()
        .route("/api/helplines", get(helpline_handler::list_helplines))
        .route(
            "/api/helplines/{category}",
            get(helpline_handler::get_helpline),
        )
}
