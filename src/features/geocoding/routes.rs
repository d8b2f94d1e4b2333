use crate::features::geocoding::handlers::geocoding_handler;
use crate::features::geocoding::Geocoder;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Public geocoding routes
pub fn routes(geocoder: Arc<dyn Geocoder>) -> Router {
    Router::new()
        .route(
            "/api/geocoding/reverse",
            get(geocoding_handler::reverse_geocode),
        )
        .route("/api/geocoding/search", get(geocoding_handler::search))
        .with_state(geocoder)
}
