use crate::features::area_overview::handlers::overview_handler;
use crate::features::area_overview::services::AreaOverviewService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Public area overview routes
pub fn routes(service: Arc<AreaOverviewService>) -> Router {
    Router::new()
        .route("/api/area-overview", get(overview_handler::get_area_overview))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::lazy_pool;
    use axum_test::TestServer;

    fn server() -> TestServer {
        let service = Arc::new(AreaOverviewService::new(lazy_pool()));
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_non_numeric_coordinates_are_rejected() {
        let response = server()
            .get("/api/area-overview")
            .add_query_param("lat", "north")
            .await;

        response.assert_status_bad_request();
    }
}
