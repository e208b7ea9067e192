use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use shared::errors::ServiceError;
use shared::utils::{Method, Metrics, OperationTracing};

use crate::abstract_trait::{DynSellRepository, SellServiceTrait};
use crate::domain::requests::list::PageRequest;
use crate::domain::requests::sell::{CreateSellRequest, IntervalFilter, UpdateSellRequest};
use crate::domain::response::{ApiResponse, Paged, SellResponse};
use crate::model::sell::Sell;

#[derive(Clone)]
pub struct SellService {
    repository: DynSellRepository,
    tracing: OperationTracing,
}

impl SellService {
    pub fn new(repository: DynSellRepository, metrics: Metrics) -> Self {
        Self {
            repository,
            tracing: OperationTracing::new("sell-service", metrics),
        }
    }
}

#[async_trait]
impl SellServiceTrait for SellService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<SellResponse>>, ServiceError> {
        let tracing_ctx = self
            .tracing
            .start_tracing("FindAllSells", vec![KeyValue::new("component", "sell")]);

        match self.repository.find_all().await {
            Ok(sells) => {
                let data = sells.into_iter().map(SellResponse::from).collect();
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "Sells fetched")
                    .await;
                Ok(ApiResponse::new(data))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch sells: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_page(
        &self,
        req: &PageRequest,
    ) -> Result<ApiResponse<Paged<SellResponse>>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "FindSellsPage",
            vec![
                KeyValue::new("component", "sell"),
                KeyValue::new("page", i64::from(req.page())),
                KeyValue::new("size", i64::from(req.size())),
            ],
        );

        match self.repository.find_page(req).await {
            Ok((sells, total)) => {
                let items = sells.into_iter().map(SellResponse::from).collect();
                let page = Paged::new(req, total, items);
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "Sell page fetched")
                    .await;
                Ok(ApiResponse::new(page))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch sell page: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<SellResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "FindSellById",
            vec![
                KeyValue::new("component", "sell"),
                KeyValue::new("sell.id", i64::from(id)),
            ],
        );

        match self.repository.find_by_id(id).await {
            Ok(sell) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "Sell fetched")
                    .await;
                Ok(ApiResponse::new(SellResponse::from(sell)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch sell {id}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn create(
        &self,
        input: &CreateSellRequest,
    ) -> Result<ApiResponse<SellResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "CreateSell",
            vec![
                KeyValue::new("component", "sell"),
                KeyValue::new("sell.user_id", i64::from(input.user_id)),
                KeyValue::new("sell.product_id", i64::from(input.product_id)),
            ],
        );

        // id and updated_at are assigned by the store; placeholders never reach SQL.
        let candidate = Sell {
            id: 0,
            user_id: input.user_id,
            product_id: input.product_id,
            updated_at: Utc::now(),
        };

        match self.repository.create(&candidate).await {
            Ok(sell) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Post, "Sell created")
                    .await;
                Ok(ApiResponse::new(SellResponse::from(sell)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Post,
                        &format!("Failed to create sell: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdateSellRequest,
    ) -> Result<ApiResponse<SellResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "UpdateSell",
            vec![
                KeyValue::new("component", "sell"),
                KeyValue::new("sell.id", i64::from(id)),
            ],
        );

        let candidate = Sell {
            id,
            user_id: input.user_id,
            product_id: input.product_id,
            updated_at: Utc::now(),
        };

        match self.repository.update(&candidate).await {
            Ok(sell) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Put, "Sell updated")
                    .await;
                Ok(ApiResponse::new(SellResponse::from(sell)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Put,
                        &format!("Failed to update sell {id}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "DeleteSell",
            vec![
                KeyValue::new("component", "sell"),
                KeyValue::new("sell.id", i64::from(id)),
            ],
        );

        match self.repository.delete(id).await {
            Ok(()) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Delete, "Sell deleted")
                    .await;
                Ok(())
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Delete,
                        &format!("Failed to delete sell {id}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_since(
        &self,
        interval: &str,
    ) -> Result<ApiResponse<Vec<SellResponse>>, ServiceError> {
        // Reject malformed intervals before anything touches the store.
        let filter = IntervalFilter::parse(interval)
            .map_err(|message| ServiceError::Validation(vec![message]))?;

        let tracing_ctx = self.tracing.start_tracing(
            "FindSellsSince",
            vec![
                KeyValue::new("component", "sell"),
                KeyValue::new("interval", filter.to_string()),
            ],
        );

        match self.repository.find_since(&filter).await {
            Ok(sells) => {
                let data = sells.into_iter().map(SellResponse::from).collect();
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "Sells fetched for interval")
                    .await;
                Ok(ApiResponse::new(data))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch sells for the last {filter}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shared::errors::RepositoryError;

    use super::*;
    use crate::abstract_trait::{EntityRepositoryTrait, SellRepositoryTrait};

    struct FixedSellRepository {
        sells: Vec<Sell>,
    }

    #[async_trait]
    impl EntityRepositoryTrait<Sell> for FixedSellRepository {
        async fn create(&self, entity: &Sell) -> Result<Sell, RepositoryError> {
            let mut created = entity.clone();
            created.id = 7;
            Ok(created)
        }

        async fn update(&self, entity: &Sell) -> Result<Sell, RepositoryError> {
            Ok(entity.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<Sell, RepositoryError> {
            self.sells
                .iter()
                .find(|s| s.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn find_all(&self) -> Result<Vec<Sell>, RepositoryError> {
            Ok(self.sells.clone())
        }

        async fn find_page(&self, _req: &PageRequest) -> Result<(Vec<Sell>, i64), RepositoryError> {
            Ok((self.sells.clone(), self.sells.len() as i64))
        }

        async fn delete(&self, _id: i32) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    #[async_trait]
    impl SellRepositoryTrait for FixedSellRepository {
        async fn find_since(&self, _filter: &IntervalFilter) -> Result<Vec<Sell>, RepositoryError> {
            Ok(self.sells.clone())
        }
    }

    fn sample_sell(id: i32) -> Sell {
        Sell {
            id,
            user_id: 1,
            product_id: 2,
            updated_at: Utc::now(),
        }
    }

    fn service_with(sells: Vec<Sell>) -> SellService {
        let repository: DynSellRepository = Arc::new(FixedSellRepository { sells });
        SellService::new(repository, Metrics::new())
    }

    #[tokio::test]
    async fn malformed_interval_is_rejected_before_the_store() {
        let service = service_with(Vec::new());

        let err = service
            .find_since("7; DROP TABLE bargains")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_unit_is_a_validation_error() {
        let service = service_with(Vec::new());

        let err = service.find_since("7 fortnights").await.unwrap_err();

        match err {
            ServiceError::Validation(messages) => {
                assert!(messages[0].contains("fortnight"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn interval_units_are_case_insensitive() {
        let service = service_with(vec![sample_sell(1)]);

        let response = service.find_since("30 MINUTES").await.unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].id, 1);
    }

    #[tokio::test]
    async fn create_assigns_store_id() {
        let service = service_with(Vec::new());
        let input = CreateSellRequest {
            user_id: 3,
            product_id: 9,
        };

        let response = service.create(&input).await.unwrap();

        assert_eq!(response.data.id, 7);
        assert_eq!(response.data.user_id, 3);
        assert_eq!(response.data.product_id, 9);
    }
}
