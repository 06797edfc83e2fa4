use axum::{extract::State, Json};

use crate::{
    error::{AppError, Result},
    models::{AuthResponse, LoginRequest},
    utils::{extractors::AppJson, jwt},
    AppState,
};

pub async fn login_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    if !state
        .config
        .admin
        .matches(&payload.username, &payload.password)
    {
        return Err(AppError::Unauthorized(
            "Invalid username or password".to_string(),
        ));
    }

    let token = jwt::generate_token(&state.config.jwt, &payload.username)?;

    tracing::info!(user = %payload.username, "Issued bearer token");

    Ok(Json(AuthResponse { token }))
}
