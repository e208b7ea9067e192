use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,

    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
}
