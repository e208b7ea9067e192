use std::sync::Arc;

use async_trait::async_trait;
use shared::errors::ServiceError;

use crate::domain::requests::list::PageRequest;
use crate::domain::requests::product::{CreateProductRequest, UpdateProductRequest};
use crate::domain::requests::sell::{CreateSellRequest, UpdateSellRequest};
use crate::domain::requests::user::{CreateUserRequest, UpdateUserRequest};
use crate::domain::response::{ApiResponse, Paged, ProductResponse, SellResponse, UserResponse};

pub type DynUserService = Arc<dyn UserServiceTrait + Send + Sync>;
pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;
pub type DynSellService = Arc<dyn SellServiceTrait + Send + Sync>;

#[async_trait]
pub trait UserServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError>;
    async fn find_page(
        &self,
        req: &PageRequest,
    ) -> Result<ApiResponse<Paged<UserResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn create(
        &self,
        input: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        input: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_page(
        &self,
        req: &PageRequest,
    ) -> Result<ApiResponse<Paged<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn create(
        &self,
        input: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        input: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait SellServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<SellResponse>>, ServiceError>;
    async fn find_page(
        &self,
        req: &PageRequest,
    ) -> Result<ApiResponse<Paged<SellResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<SellResponse>, ServiceError>;
    async fn create(
        &self,
        input: &CreateSellRequest,
    ) -> Result<ApiResponse<SellResponse>, ServiceError>;
    async fn update(
        &self,
        id: i32,
        input: &UpdateSellRequest,
    ) -> Result<ApiResponse<SellResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
    async fn find_since(&self, interval: &str)
        -> Result<ApiResponse<Vec<SellResponse>>, ServiceError>;
}
