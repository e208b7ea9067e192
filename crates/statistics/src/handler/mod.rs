mod product;
mod sell;
mod user;

use crate::state::AppState;
use anyhow::Result;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use shared::errors::HttpError;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::product::product_routes;
pub use self::sell::sell_routes;
pub use self::user::user_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,

        product::get_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,

        sell::get_sales,
        sell::get_sales_interval,
        sell::get_sale,
        sell::create_sale,
        sell::update_sale,
        sell::delete_sale,
    ),
    tags(
        (name = "User", description = "User endpoints"),
        (name = "Product", description = "Product endpoints"),
        (name = "Sell", description = "Sell endpoints"),
    )
)]
struct ApiDoc;

/// Path segments arrive as text; anything that is not an i32 is a 400.
pub(crate) fn parse_id(raw: &str) -> Result<i32, HttpError> {
    raw.parse::<i32>()
        .map_err(|_| HttpError::bad_request("invalid id", format!("'{raw}' is not a numeric id")))
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Body::from(format!("Failed to encode metrics: {e}")))
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )
        .body(Body::from(buffer))
        .unwrap()
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/health", get(health_check))
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(user_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(sell_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(TraceLayer::new_for_http())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app =
            app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let app = Router::new().route("/health", get(health_check));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[test]
    fn non_numeric_id_is_a_bad_request() {
        let err = parse_id("abc").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn numeric_id_parses() {
        assert_eq!(parse_id("42").unwrap(), 42);
    }
}
