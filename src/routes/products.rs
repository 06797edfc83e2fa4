use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde_json::json;

use crate::{
    error::{AppError, Result},
    models::{Product, ProductRequest},
    queries::product_queries,
    utils::extractors::AppJson,
    AppState,
};

pub async fn list_products(State(state): State<AppState>) -> Result<Response> {
    let products = product_queries::find_all(&state.db).await?;

    if products.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(products).into_response())
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductRequest>,
) -> Result<Response> {
    validate(&payload)?;

    let product = product_queries::create(&state.db, &payload).await?;

    tracing::info!(id = product.id, name = %product.name, "Created product");

    let location = format!("/api/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    )
        .into_response())
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<ProductRequest>,
) -> Result<Json<Product>> {
    validate(&payload)?;

    let product = product_queries::update(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    let deleted = product_queries::delete(&state.db, id).await?;

    if deleted == 0 {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    tracing::info!(id, "Deleted product");

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

fn validate(payload: &ProductRequest) -> Result<()> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }

    if payload.price < Decimal::ZERO {
        return Err(AppError::BadRequest(
            "price must not be negative".to_string(),
        ));
    }

    Ok(())
}
