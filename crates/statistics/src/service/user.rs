use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use shared::errors::ServiceError;
use shared::utils::{Method, Metrics, OperationTracing};

use crate::abstract_trait::{DynUserRepository, UserServiceTrait};
use crate::domain::requests::list::PageRequest;
use crate::domain::requests::user::{CreateUserRequest, UpdateUserRequest};
use crate::domain::response::{ApiResponse, Paged, UserResponse};
use crate::model::user::User;

#[derive(Clone)]
pub struct UserService {
    repository: DynUserRepository,
    tracing: OperationTracing,
}

impl UserService {
    pub fn new(repository: DynUserRepository, metrics: Metrics) -> Self {
        Self {
            repository,
            tracing: OperationTracing::new("user-service", metrics),
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<UserResponse>>, ServiceError> {
        let tracing_ctx = self
            .tracing
            .start_tracing("FindAllUsers", vec![KeyValue::new("component", "user")]);

        match self.repository.find_all().await {
            Ok(users) => {
                let data = users.into_iter().map(UserResponse::from).collect();
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "Users fetched")
                    .await;
                Ok(ApiResponse::new(data))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch users: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_page(
        &self,
        req: &PageRequest,
    ) -> Result<ApiResponse<Paged<UserResponse>>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "FindUsersPage",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("page", i64::from(req.page())),
                KeyValue::new("size", i64::from(req.size())),
            ],
        );

        match self.repository.find_page(req).await {
            Ok((users, total)) => {
                let items = users.into_iter().map(UserResponse::from).collect();
                let page = Paged::new(req, total, items);
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "User page fetched")
                    .await;
                Ok(ApiResponse::new(page))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch user page: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "FindUserById",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("user.id", i64::from(id)),
            ],
        );

        match self.repository.find_by_id(id).await {
            Ok(user) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Get, "User fetched")
                    .await;
                Ok(ApiResponse::new(UserResponse::from(user)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Get,
                        &format!("Failed to fetch user {id}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn create(
        &self,
        input: &CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "CreateUser",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("user.login", input.login.clone()),
            ],
        );

        // id and updated_at are assigned by the store; placeholders never reach SQL.
        let candidate = User {
            id: 0,
            name: input.name.clone(),
            login: input.login.clone(),
            password: input.password.clone(),
            is_admin: input.is_admin,
            updated_at: Utc::now(),
        };

        match self.repository.create(&candidate).await {
            Ok(user) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Post, "User created")
                    .await;
                Ok(ApiResponse::new(UserResponse::from(user)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Post,
                        &format!("Failed to create user: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update(
        &self,
        id: i32,
        input: &UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "UpdateUser",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("user.id", i64::from(id)),
            ],
        );

        let candidate = User {
            id,
            name: input.name.clone(),
            login: input.login.clone(),
            password: input.password.clone(),
            is_admin: input.is_admin,
            updated_at: Utc::now(),
        };

        match self.repository.update(&candidate).await {
            Ok(user) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Put, "User updated")
                    .await;
                Ok(ApiResponse::new(UserResponse::from(user)))
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Put,
                        &format!("Failed to update user {id}: {e}"),
                    )
                    .await;
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let tracing_ctx = self.tracing.start_tracing(
            "DeleteUser",
            vec![
                KeyValue::new("component", "user"),
                KeyValue::new("user.id", i64::from(id)),
            ],
        );

        match self.repository.delete(id).await {
            Ok(()) => {
                self.tracing
                    .complete_tracing_success(&tracing_ctx, Method::Delete, "User deleted")
                    .await;
                Ok(())
            }
            Err(e) => {
                self.tracing
                    .complete_tracing_error(
                        &tracing_ctx,
                        Method::Delete,
                        &format!("Failed to delete user {id}: {e}"),
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
    use crate::abstract_trait::EntityRepositoryTrait;

    struct FixedUserRepository {
        users: Vec<User>,
    }

    #[async_trait]
    impl EntityRepositoryTrait<User> for FixedUserRepository {
        async fn create(&self, entity: &User) -> Result<User, RepositoryError> {
            let mut created = entity.clone();
            created.id = 42;
            Ok(created)
        }

        async fn update(&self, entity: &User) -> Result<User, RepositoryError> {
            if !self.users.iter().any(|u| u.id == entity.id) {
                return Err(RepositoryError::NotFound);
            }
            Ok(entity.clone())
        }

        async fn find_by_id(&self, id: i32) -> Result<User, RepositoryError> {
            self.users
                .iter()
                .find(|u| u.id == id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
            Ok(self.users.clone())
        }

        async fn find_page(&self, req: &PageRequest) -> Result<(Vec<User>, i64), RepositoryError> {
            let total = self.users.len() as i64;
            if total == 0 {
                return Ok((Vec::new(), 0));
            }
            let rows = self
                .users
                .iter()
                .skip(req.offset() as usize)
                .take(req.limit() as usize)
                .cloned()
                .collect();
            Ok((rows, total))
        }

        async fn delete(&self, _id: i32) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn sample_user(id: i32) -> User {
        User {
            id,
            name: format!("user-{id}"),
            login: format!("login-{id}"),
            password: "secret".to_string(),
            is_admin: false,
            updated_at: Utc::now(),
        }
    }

    fn service_with(users: Vec<User>) -> UserService {
        let repository: DynUserRepository = Arc::new(FixedUserRepository { users });
        UserService::new(repository, Metrics::new())
    }

    #[tokio::test]
    async fn find_by_id_maps_row_to_response() {
        let service = service_with(vec![sample_user(1)]);

        let response = service.find_by_id(1).await.unwrap();

        assert_eq!(response.data.id, 1);
        assert_eq!(response.data.login, "login-1");
    }

    #[tokio::test]
    async fn find_by_id_propagates_not_found() {
        let service = service_with(vec![sample_user(1)]);

        let err = service.find_by_id(99).await.unwrap_err();

        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn create_assigns_store_id() {
        let service = service_with(Vec::new());
        let input = CreateUserRequest {
            name: "Ada".to_string(),
            login: "ada".to_string(),
            password: "pw".to_string(),
            is_admin: true,
        };

        let response = service.create(&input).await.unwrap();

        assert_eq!(response.data.id, 42);
        assert!(response.data.is_admin);
    }

    #[tokio::test]
    async fn update_propagates_not_found() {
        let service = service_with(vec![sample_user(1)]);
        let input = UpdateUserRequest {
            name: "Ada".to_string(),
            login: "ada".to_string(),
            password: "pw".to_string(),
            is_admin: false,
        };

        let err = service.update(99, &input).await.unwrap_err();

        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn find_page_computes_envelope() {
        let service = service_with((1..=25).map(sample_user).collect());

        let response = service.find_page(&PageRequest::new(2, 10)).await.unwrap();

        let page = response.data;
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].id, 11);
        assert!(page.has_more);
    }

    #[tokio::test]
    async fn empty_store_yields_empty_page() {
        let service = service_with(Vec::new());

        let response = service.find_page(&PageRequest::new(1, 10)).await.unwrap();

        let page = response.data;
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_more);
        assert!(page.items.is_empty());
    }
}
