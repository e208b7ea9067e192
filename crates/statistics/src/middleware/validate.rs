use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::{Validate, ValidationErrors};

/// Json extractor that runs the payload through its `Validate` rules and
/// rejects with the standard error envelope.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(payload) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                HttpError::bad_request("invalid request body", rejection.body_text())
            })?;

        payload.validate().map_err(|errors| {
            HttpError::bad_request("validation failed", format_validation_errors(&errors))
        })?;

        Ok(Self(payload))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid {field}"));
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        "validation failed".to_string()
    } else {
        messages.join("; ")
    }
}
