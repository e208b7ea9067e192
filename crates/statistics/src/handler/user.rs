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

use crate::abstract_trait::DynUserService;
use crate::domain::requests::list::ListParams;
use crate::domain::requests::user::{CreateUserRequest, UpdateUserRequest};
use crate::domain::response::{ApiResponse, UserResponse};
use crate::middleware::ValidatedJson;
use crate::state::AppState;

use super::parse_id;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "User",
    params(ListParams),
    responses(
        (status = 200, description = "List of users", body = ApiResponse<Vec<UserResponse>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserService>,
    Query(params): Query<ListParams>,
) -> Result<Response, HttpError> {
    match params.page_request() {
        Some(req) => {
            let response = service
                .find_page(&req)
                .await
                .map_err(|e| HttpError::because("cannot get users", e))?;
            Ok((StatusCode::OK, Json(response)).into_response())
        }
        None => {
            let response = service
                .find_all()
                .await
                .map_err(|e| HttpError::because("cannot get users", e))?;
            Ok((StatusCode::OK, Json(response)).into_response())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    let response = service
        .find_by_id(id)
        .await
        .map_err(|e| HttpError::because("cannot get user", e))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "User",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    Extension(service): Extension<DynUserService>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service
        .create(&body)
        .await
        .map_err(|e| HttpError::because("cannot create user", e))?;

    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserResponse>),
        (status = 400, description = "Invalid id or payload", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn update_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    let response = service
        .update(id, &body)
        .await
        .map_err(|e| HttpError::because("cannot update user", e))?;

    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "User",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = serde_json::Value),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    Extension(service): Extension<DynUserService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let id = parse_id(&id)?;

    service
        .delete(id)
        .await
        .map_err(|e| HttpError::because("cannot delete user", e))?;

    Ok((StatusCode::OK, Json(json!({ "data": null }))))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users", get(get_users))
        .route("/api/users", post(create_user))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}", put(update_user))
        .route("/api/users/{id}", delete(delete_user))
        .layer(Extension(app_state.di_container.user_service.clone()))
}
