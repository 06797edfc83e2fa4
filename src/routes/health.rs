use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{error::Result, queries::product_queries, AppState};

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
        })),
    )
}

/// Proves the database is reachable by counting the products table.
pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let products = product_queries::count(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "products": products,
        })),
    ))
}
