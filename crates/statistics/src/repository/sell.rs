use async_trait::async_trait;
use shared::errors::RepositoryError;
use tracing::info;

use crate::abstract_trait::SellRepositoryTrait;
use crate::domain::requests::sell::IntervalFilter;
use crate::model::sell::Sell;

use super::table::select_since_sql;
use super::PgRepository;

#[async_trait]
impl SellRepositoryTrait for PgRepository<Sell> {
    async fn find_since(&self, filter: &IntervalFilter) -> Result<Vec<Sell>, RepositoryError> {
        info!("🔍 Fetching bargains from the last {filter}");

        let sql = select_since_sql::<Sell>();
        let rows = sqlx::query_as::<_, Sell>(&sql)
            .bind(filter.to_string())
            .fetch_all(self.pool())
            .await?;

        Ok(rows)
    }
}
