use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use doctors_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as a bare JSON string body; clients of this API
/// never see an error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `doctors_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not the JSON shape the handler expects.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Not-found stays a 400; existing clients depend on it.
            AppError::Core(core @ CoreError::NotFound { .. }) => {
                (StatusCode::BAD_REQUEST, core.to_string())
            }

            AppError::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, axum::Json(message)).into_response()
    }
}
