//! Health check endpoint.

use actix_web::HttpResponse;
use blog_shared::dto::HealthResponse;

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};

    use crate::handlers::configure_routes;
    use crate::handlers::test_support::empty_state;

    #[actix_web::test]
    async fn test_health_reports_healthy() {
        let app = test::init_service(
            App::new()
                .app_data(empty_state())
                .configure(configure_routes),
        )
        .await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
    }
}
