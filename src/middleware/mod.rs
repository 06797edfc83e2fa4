use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{app::AppState, error::AppError, utils::jwt};

/// Rejects the request with 401 unless it carries a valid bearer token.
/// Verified claims are left in request extensions for the handler.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = match bearer_token(&req)
        .and_then(|token| jwt::verify_token(&state.config.jwt, token))
    {
        Ok(claims) => {
            tracing::debug!(user = %claims.sub, "Token validated successfully");
            claims
        }
        Err(e) => {
            tracing::debug!("Token validation failed: {}", e);
            return Err(e);
        }
    };

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Result<&str, AppError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Authorization scheme must be Bearer".to_string()))
}
