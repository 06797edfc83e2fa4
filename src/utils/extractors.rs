use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with its rejection mapped to the service's 400 error, so a
/// `null` or mistyped request body surfaces as Bad Request.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
