use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One completed sale, stored in the `bargains` table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sell {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub updated_at: DateTime<Utc>,
}
