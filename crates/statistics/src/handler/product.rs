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

use crate::abstract_trait::DynProductService;
use crate::domain::requests::list::ListParams;
use crate::domain::requests::product::{CreateProductRequest, UpdateProductRequest};
use crate::domain::response::{ApiResponse, ProductResponse};
use crate::middleware::ValidatedJson;
use crate::state::AppState;

use super::parse_id;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(ListParams),
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
    Query(params): Query<ListParams>,
) -> Result<Response, HttpError> {
    match params.page_request() {
        Some(req) => {
            let response = service
                .find_page(&req)
                .await
                .map_err(|e| HttpError::because("cannot get products", e))?;
            Ok((StatusCode::OK, Json(response)).into_response())
        }
        None => {
            let response = service
                .find_all()
                .await
                .map_err(|e| HttpError::because("cannot get products", e))?;
            Ok((StatusCode::OK, Json(response)).into_response())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    let response = service
        .find_by_id(id)
        .await
        .map_err(|e| HttpError::because("cannot get product", e))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .create(&body)
        .await
        .map_err(|e| HttpError::because("cannot create product", e))?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid id or payload", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    let response = service
        .update(id, &body)
        .await
        .map_err(|e| HttpError::because("cannot update product", e))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = serde_json::Value),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    service
        .delete(id)
        .await
        .map_err(|e| HttpError::because("cannot delete product", e))?;

    Ok((StatusCode::OK, Json(json!({ "data": null }))))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products", post(create_product))
        .route("/api/products/{id}", get(get_product))
        .route("/api/products/{id}", put(update_product))
        .route("/api/products/{id}", delete(delete_product))
        .layer(Extension(app_state.di_container.product_service.clone()))
}
