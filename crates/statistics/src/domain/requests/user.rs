use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "login must not be empty"))]
    pub login: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,

    #[serde(default)]
    pub is_admin: bool,
}

/// Full-row overwrite: every mutable column must be supplied; the id comes
/// from the request path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(length(min = 1, message = "login must not be empty"))]
    pub login: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,

    #[serde(default)]
    pub is_admin: bool,
}
