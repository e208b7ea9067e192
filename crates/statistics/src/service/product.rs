use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use shared::errors::ServiceError;
use shared::utils::{Method, Metrics, OperationTracing};

use crate::abstract_trait::{DynProductRepository, ProductServiceTrait};
use crate::domain::requests::list::PageRequest;
use crate::domain::requests::product::{CreateProductRequest, UpdateProductRequest};
use crate::domain::response::{ApiResponse, Paged, ProductResponse};
use crate::model::product::Product;

#[derive(Clone)]
pub struct ProductService {
    repository: DynProductRepository,
    tracing: OperationTracing,
}

impl ProductService {
    pub fn new(repository: DynProductRepository, metrics: Metrics) -> Self {
        Self {
            repository,
            tracing: OperationTracing::new("product-service", metrics),
        }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let tracing_ctx = self
            .tracing
            .start_tracing("FindAllProducts", vec![KeyValue::new("component", "product")]);

        match self.repository.find_all().await {
            Ok(products) => {
                let data = products.into_iter().map(ProductResponse::from).collect();
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "Products fetched")
                    .await;
                Ok(ApiResponse::new(data))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch products: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_page(
        &self,
        req: &PageRequest,
    ) -> Result<ApiResponse<Paged<ProductResponse>>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "FindProductsPage",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("page", i64::from(req.page())),
                KeyValue::new("size", i64::from(req.size())),
            ],
        );

        match self.repository.find_page(req).await {
            Ok((products, total)) => {
                let items = products.into_iter().map(ProductResponse::from).collect();
                let page = Paged::new(req, total, items);
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "Product page fetched")
                    .await;
                Ok(ApiResponse::new(page))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch product page: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "FindProductById",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", i64::from(id)),
            ],
        );

        match self.repository.find_by_id(id).await {
            Ok(product) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "Product fetched")
                    .await;
                Ok(ApiResponse::new(ProductResponse::from(product)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch product {id}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn create(
        &self,
        input: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "CreateProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.name", input.name.clone()),
            ],
        );

        // id and both timestamps are assigned by the store; placeholders never reach SQL.
        let candidate = Product {
            id: 0,
            name: input.name.clone(),
            price: input.price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        match self.repository.create(&candidate).await {
            Ok(product) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Post, "Product created")
                    .await;
                Ok(ApiResponse::new(ProductResponse::from(product)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Post,
                        &format!("Failed to create product: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "UpdateProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", i64::from(id)),
            ],
        );

        let candidate = Product {
            id,
            name: input.name.clone(),
            price: input.price,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        match self.repository.update(&candidate).await {
            Ok(product) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Put, "Product updated")
                    .await;
                Ok(ApiResponse::new(ProductResponse::from(product)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Put,
                        &format!("Failed to update product {id}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "DeleteProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("product.id", i64::from(id)),
            ],
        );

        match self.repository.delete(id).await {
            Ok(()) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Delete, "Product deleted")
                    .await;
                Ok(())
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Delete,
                        &format!("Failed to delete product {id}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }
}
