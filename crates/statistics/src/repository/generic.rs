use std::marker::PhantomData;

use async_trait::async_trait;
use shared::config::ConnectionPool;
use shared::errors::RepositoryError;
use sqlx::error::BoxDynError;
use sqlx::postgres::PgArguments;
use sqlx::Arguments;
use tracing::{error, info};

use crate::abstract_trait::EntityRepositoryTrait;
use crate::domain::requests::list::PageRequest;

use super::table::{
    count_sql, delete_sql, insert_sql, select_all_sql, select_by_id_sql, select_page_sql,
    update_sql, Table,
};

/// One repository for every entity; the [`Table`] impl supplies the
/// table-specific pieces.
#[derive(Clone)]
pub struct PgRepository<T> {
    db: ConnectionPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PgRepository<T> {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &ConnectionPool {
        &self.db
    }
}

fn bind_error(err: BoxDynError) -> RepositoryError {
    RepositoryError::Custom(format!("Failed to bind parameters: {err}"))
}

#[async_trait]
impl<T: Table> EntityRepositoryTrait<T> for PgRepository<T> {
    async fn create(&self, entity: &T) -> Result<T, RepositoryError> {
        info!("📝 Inserting row into {}", T::TABLE);

        let mut args = PgArguments::default();
        entity.bind_data(&mut args).map_err(bind_error)?;

        let sql = insert_sql::<T>();
        let created = sqlx::query_as_with::<_, T, _>(&sql, args)
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!("❌ Insert into {} failed: {e}", T::TABLE);
                RepositoryError::from(e)
            })?;

        Ok(created)
    }

    async fn update(&self, entity: &T) -> Result<T, RepositoryError> {
        info!("✏️ Updating {} id {}", T::TABLE, entity.id());

        let mut args = PgArguments::default();
        args.add(entity.id()).map_err(bind_error)?;
        entity.bind_data(&mut args).map_err(bind_error)?;

        let sql = update_sql::<T>();
        let updated = sqlx::query_as_with::<_, T, _>(&sql, args)
            .fetch_optional(&self.db)
            .await?;

        updated.ok_or(RepositoryError::NotFound)
    }

    async fn find_by_id(&self, id: i32) -> Result<T, RepositoryError> {
        info!("🔍 Fetching {} row id {id}", T::TABLE);

        let sql = select_by_id_sql::<T>();
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    async fn find_all(&self) -> Result<Vec<T>, RepositoryError> {
        info!("🔍 Fetching all rows from {}", T::TABLE);

        let sql = select_all_sql::<T>();
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.db).await?;

        Ok(rows)
    }

    async fn find_page(&self, req: &PageRequest) -> Result<(Vec<T>, i64), RepositoryError> {
        info!(
            "🔍 Fetching {} page {} (size {})",
            T::TABLE,
            req.page(),
            req.size()
        );

        let count = count_sql::<T>();
        let total: i64 = sqlx::query_scalar(&count).fetch_one(&self.db).await?;

        // An empty table needs no bounded query.
        if total == 0 {
            return Ok((Vec::new(), 0));
        }

        let sql = select_page_sql::<T>();
        let rows = sqlx::query_as::<_, T>(&sql)
            .bind(req.limit())
            .bind(req.offset())
            .fetch_all(&self.db)
            .await?;

        Ok((rows, total))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        info!("🗑️ Deleting {} row id {id}", T::TABLE);

        // Deleting an absent id is a no-op, not an error.
        let sql = delete_sql::<T>();
        let result = sqlx::query(&sql).bind(id).execute(&self.db).await?;

        info!(
            "🗑️ Deleted {} row(s) from {}",
            result.rows_affected(),
            T::TABLE
        );

        Ok(())
    }
}
