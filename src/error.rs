use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{response::MessageBody, store::StoreError, validation::FieldError};

#[derive(Debug, Error)]
pub enum AppError {
    /// Carries the entity name, e.g. `"Product"`.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Validation error")]
    Validation(Vec<FieldError>),

    #[error("Store error")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                MessageBody::new(format!("{entity} not found")),
            ),
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                MessageBody::with_errors("Validation error", errors),
            ),
            AppError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MessageBody::new("Internal server error"),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
