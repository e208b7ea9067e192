use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde_json::json;
use shared::errors::{ErrorResponse, HttpError};
use utoipa_axum::router::OpenApiRouter;

use crate::abstract_trait::DynSellService;
use crate::domain::requests::list::ListParams;
use crate::domain::requests::sell::{CreateSellRequest, IntervalParams, UpdateSellRequest};
use crate::domain::response::{ApiResponse, SellResponse};
use crate::middleware::ValidatedJson;
use crate::state::AppState;

use super::parse_id;

#[utoipa::path(
    get,
    path = "/api/sales",
    tag = "Sell",
    params(ListParams),
    responses(
        (status = 200, description = "List of sales", body = ApiResponse<Vec<SellResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_sales(
    Extension(service): Extension<DynSellService>,
    Query(params): Query<ListParams>,
) -> Result<Response, HttpError> {
    match params.page_request() {
        Some(req) => {
            let response = service
                .find_page(&req)
                .await
                .map_err(|e| HttpError::because("cannot get sales", e))?;
            Ok((StatusCode::OK, Json(response)).into_response())
        }
        None => {
            let response = service
                .find_all()
                .await
                .map_err(|e| HttpError::because("cannot get sales", e))?;
            Ok((StatusCode::OK, Json(response)).into_response())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/sales/interval",
    tag = "Sell",
    params(IntervalParams),
    responses(
        (status = 200, description = "Sales within the lookback window", body = ApiResponse<Vec<SellResponse>>),
        (status = 400, description = "Malformed interval", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_sales_interval(
    Extension(service): Extension<DynSellService>,
    Query(params): Query<IntervalParams>,
) -> Result<impl IntoResponse, HttpError> {
    let interval = params.interval.unwrap_or_default();

    let response = service
        .find_since(&interval)
        .await
        .map_err(|e| HttpError::because("cannot get sales for interval", e))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/sales/{id}",
    tag = "Sell",
    params(("id" = i32, Path, description = "Sell ID")),
    responses(
        (status = 200, description = "Sell details", body = ApiResponse<SellResponse>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Sell not found", body = ErrorResponse)
    )
)]
pub async fn get_sale(
    Extension(service): Extension<DynSellService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    let response = service
        .find_by_id(id)
        .await
        .map_err(|e| HttpError::because("cannot get sale", e))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/sales",
    tag = "Sell",
    request_body = CreateSellRequest,
    responses(
        (status = 201, description = "Sell created", body = ApiResponse<SellResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_sale(
    Extension(service): Extension<DynSellService>,
    ValidatedJson(body): ValidatedJson<CreateSellRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .create(&body)
        .await
        .map_err(|e| HttpError::because("cannot create sale", e))?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/sales/{id}",
    tag = "Sell",
    params(("id" = i32, Path, description = "Sell ID")),
    request_body = UpdateSellRequest,
    responses(
        (status = 200, description = "Sell updated", body = ApiResponse<SellResponse>),
        (status = 400, description = "Invalid id or payload", body = ErrorResponse),
        (status = 404, description = "Sell not found", body = ErrorResponse)
    )
)]
pub async fn update_sale(
    Extension(service): Extension<DynSellService>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateSellRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    let response = service
        .update(id, &body)
        .await
        .map_err(|e| HttpError::because("cannot update sale", e))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/sales/{id}",
    tag = "Sell",
    params(("id" = i32, Path, description = "Sell ID")),
    responses(
        (status = 200, description = "Sell deleted", body = serde_json::Value),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_sale(
    Extension(service): Extension<DynSellService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    service
        .delete(id)
        .await
        .map_err(|e| HttpError::because("cannot delete sale", e))?;

    Ok((StatusCode::OK, Json(json!({ "data": null }))))
}

pub fn sell_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/sales", get(get_sales))
        .route("/api/sales", post(create_sale))
        .route("/api/sales/interval", get(get_sales_interval))
        .route("/api/sales/{id}", get(get_sale))
        .route("/api/sales/{id}", put(update_sale))
        .route("/api/sales/{id}", delete(delete_sale))
        .layer(Extension(app_state.di_container.sell_service.clone()))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::Router;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::Utc;
    use shared::errors::{RepositoryError, ServiceError};
    use tower::ServiceExt;

    use super::*;
    use crate::abstract_trait::SellServiceTrait;
    use crate::domain::requests::list::PageRequest;
    use crate::domain::requests::sell::IntervalFilter;
    use crate::domain::response::Paged;

    struct StubSellService;

    fn sample_response(id: i32) -> SellResponse {
        SellResponse {
            id,
            user_id: 1,
            product_id: 2,
            updated_at: Utc::now(),
        }
    }

    #[async_trait]
    impl SellServiceTrait for StubSellService {
        async fn find_all(&self) -> Result<ApiResponse<Vec<SellResponse>>, ServiceError> {
            Ok(ApiResponse::new(vec![sample_response(1)]))
        }

        async fn find_page(
            &self,
            req: &PageRequest,
        ) -> Result<ApiResponse<Paged<SellResponse>>, ServiceError> {
            let page = Paged::new(req, 1, vec![sample_response(1)]);
            Ok(ApiResponse::new(page))
        }

        async fn find_by_id(&self, id: i32) -> Result<ApiResponse<SellResponse>, ServiceError> {
            if id == 1 {
                Ok(ApiResponse::new(sample_response(1)))
            } else {
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
        }

        async fn create(
            &self,
            input: &CreateSellRequest,
        ) -> Result<ApiResponse<SellResponse>, ServiceError> {
            let mut created = sample_response(7);
            created.user_id = input.user_id;
            created.product_id = input.product_id;
            Ok(ApiResponse::new(created))
        }

        async fn update(
            &self,
            id: i32,
            input: &UpdateSellRequest,
        ) -> Result<ApiResponse<SellResponse>, ServiceError> {
            let mut updated = sample_response(id);
            updated.user_id = input.user_id;
            Ok(ApiResponse::new(updated))
        }

        async fn delete(&self, _id: i32) -> Result<(), ServiceError> {
            Ok(())
        }

        async fn find_since(
            &self,
            interval: &str,
        ) -> Result<ApiResponse<Vec<SellResponse>>, ServiceError> {
            IntervalFilter::parse(interval)
                .map_err(|message| ServiceError::Validation(vec![message]))?;
            Ok(ApiResponse::new(vec![sample_response(1)]))
        }
    }

    fn router() -> Router {
        let service: DynSellService = Arc::new(StubSellService);
        Router::new()
            .route("/api/sales", get(get_sales).post(create_sale))
            .route("/api/sales/interval", get(get_sales_interval))
            .route("/api/sales/{id}", get(get_sale).delete(delete_sale))
            .layer(Extension(service))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn interval_query_returns_matching_sales() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/sales/interval?interval=7%20days")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"][0]["id"], 1);
    }

    #[tokio::test]
    async fn malformed_interval_is_a_bad_request() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/sales/interval?interval=7%20fortnights")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "cannot get sales for interval");
    }

    #[tokio::test]
    async fn missing_interval_is_a_bad_request() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/sales/interval")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn interval_segment_is_not_treated_as_an_id() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/sales/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["data"]["user_id"], 1);
    }

    #[tokio::test]
    async fn create_wraps_created_sale() {
        let payload = json!({
            "user_id": 3,
            "product_id": 9
        });

        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sales")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["data"]["id"], 7);
        assert_eq!(body["data"]["product_id"], 9);
    }

    #[tokio::test]
    async fn non_positive_ids_are_rejected() {
        let payload = json!({
            "user_id": 0,
            "product_id": 9
        });

        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/sales")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "validation failed");
    }
}
