use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Failure envelope returned by every handler: a static description of the
/// operation that failed plus the underlying error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    pub err: String,
}
