use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub login: String,
    pub password: String,
    pub is_admin: bool,
    pub updated_at: DateTime<Utc>,
}
