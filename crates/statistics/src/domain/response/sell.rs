use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::sell::Sell;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SellResponse {
    pub id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub updated_at: DateTime<Utc>,
}

impl From<Sell> for SellResponse {
    fn from(sell: Sell) -> Self {
        Self {
            id: sell.id,
            user_id: sell.user_id,
            product_id: sell.product_id,
            updated_at: sell.updated_at,
        }
    }
}
