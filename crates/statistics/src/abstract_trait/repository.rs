use std::sync::Arc;

use async_trait::async_trait;
use shared::errors::RepositoryError;

use crate::domain::requests::list::PageRequest;
use crate::domain::requests::sell::IntervalFilter;
use crate::model::product::Product;
use crate::model::sell::Sell;
use crate::model::user::User;

pub type DynUserRepository = Arc<dyn EntityRepositoryTrait<User> + Send + Sync>;
pub type DynProductRepository = Arc<dyn EntityRepositoryTrait<Product> + Send + Sync>;
pub type DynSellRepository = Arc<dyn SellRepositoryTrait + Send + Sync>;

/// Storage operations shared by every entity.
#[async_trait]
pub trait EntityRepositoryTrait<T> {
    async fn create(&self, entity: &T) -> Result<T, RepositoryError>;
    async fn update(&self, entity: &T) -> Result<T, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<T, RepositoryError>;
    async fn find_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn find_page(&self, req: &PageRequest) -> Result<(Vec<T>, i64), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

/// Sell rows additionally support an interval-bounded lookup.
#[async_trait]
pub trait SellRepositoryTrait: EntityRepositoryTrait<Sell> {
    async fn find_since(&self, filter: &IntervalFilter) -> Result<Vec<Sell>, RepositoryError>;
}
