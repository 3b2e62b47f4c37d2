//! Request extractors with JSON-string error bodies.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection is converted into [`AppError`], so a missing
/// or mistyped field answers with a 4xx JSON string like every other error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
