use axum::{extract::{Path, State}, http::StatusCode, Json};
use models::product::{self, Product, ProductInput};
use tracing::info;

use crate::{errors::ApiError, state::AppState};

fn validated(input: &ProductInput) -> Result<product::ProductDraft, ApiError> {
    product::validate(input).map_err(|errs| {
        info!(failed_fields = errs.len(), "product payload rejected");
        ApiError::from(errs)
    })
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    responses((status = 200, description = "All products", body = [crate::openapi::ProductDoc]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list().await?;
    info!(count = products.len(), "list products");
    Ok(Json(products))
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn view(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Product>, ApiError> {
    state.products.get(id).await?.map(Json).ok_or(ApiError::NotFound)
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc)
    )
)]
pub async fn create(State(state): State<AppState>, Json(input): Json<ProductInput>) -> Result<(StatusCode, Json<Product>), ApiError> {
    let draft = validated(&input)?;
    let created = state.products.create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Responds 201 on success, kept for compatibility with existing clients.
#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 201, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ValidationErrorsDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let draft = validated(&input)?;
    let updated = state.products.update(id, draft).await?.ok_or(ApiError::NotFound)?;
    Ok((StatusCode::CREATED, Json(updated)))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted, returns the removed product", body = crate::openapi::ProductDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Product>, ApiError> {
    state.products.delete(id).await?.map(Json).ok_or(ApiError::NotFound)
}
