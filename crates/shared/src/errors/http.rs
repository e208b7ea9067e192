use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// HTTP-facing error. Every variant carries the handler-supplied description
/// of what failed (`message`) and the underlying error detail (`err`).
#[derive(Debug)]
pub enum HttpError {
    BadRequest { message: String, err: String },
    NotFound { message: String, err: String },
    Internal { message: String, err: String },
}

impl HttpError {
    pub fn bad_request(message: impl Into<String>, err: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            err: err.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, err: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            err: err.into(),
        }
    }

    pub fn internal(message: impl Into<String>, err: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            err: err.into(),
        }
    }

    /// Maps a service failure onto a status class: missing rows become 404,
    /// rejected input becomes 400, everything else is a 500.
    pub fn because(message: impl Into<String>, source: ServiceError) -> Self {
        let message = message.into();
        let err = source.to_string();
        match source {
            ServiceError::Repo(RepositoryError::NotFound) => Self::NotFound { message, err },
            ServiceError::Validation(_) => Self::BadRequest { message, err },
            _ => Self::Internal { message, err },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, err) = match self {
            Self::BadRequest { message, err }
            | Self::NotFound { message, err }
            | Self::Internal { message, err } => (message, err),
        };

        (status, Json(ErrorResponse { message, err })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = HttpError::because(
            "cannot get user",
            ServiceError::Repo(RepositoryError::NotFound),
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = HttpError::because(
            "cannot list sales",
            ServiceError::Validation(vec!["interval unit not recognized".into()]),
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = HttpError::because(
            "cannot get users",
            ServiceError::Repo(RepositoryError::Sqlx(sqlx::Error::PoolClosed)),
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn response_body_carries_message_and_err() {
        let response = HttpError::not_found("cannot get product", "Not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "cannot get product");
        assert_eq!(body["err"], "Not found");
    }
}
