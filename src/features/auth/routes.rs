use crate::features::auth::handler;
use axum::{routing::get, Router};

/// Protected auth routes (require JWT authentication)
pub fn protected_routes() -> Router {
    Router::new().route("/api/auth/me", get(handler::get_me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{create_worker, with_user};
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_me_returns_worker_home_view() {
        let server = TestServer::new(with_user(protected_routes(), create_worker())).unwrap();

        let response = server.get("/api/auth/me").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["uid"], "worker-1");
        assert_eq!(body["data"]["role"], "worker");
        assert_eq!(body["data"]["home_view"], "/worker");
    }

    #[tokio::test]
    async fn test_me_without_session_is_unauthorized() {
        let server = TestServer::new(protected_routes()).unwrap();

        let response = server.get("/api/auth/me").await;
        response.assert_status_unauthorized();
    }
}
