//! Product API Handlers
//!
//! Read responses resolve every reference (supplier, brand, branch,
//! categories, unit, audit users) to a display subset.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::api::PageQuery;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{ProductDetail, ProductInput};
use crate::db::repository::ProductRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/products
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ProductInput>,
) -> AppResult<ApiResponse<ProductDetail>> {
    payload.validate()?;
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let product = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created("Product created successfully", product))
}

/// GET /api/products?page=&limit=
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageQuery>,
) -> AppResult<ApiResponse<Vec<ProductDetail>>> {
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let products = repo.find_page(params.page(), params.limit()).await?;
    if products.is_empty() {
        return Err(AppError::not_found("No products found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Products retrieved successfully",
        count,
        products,
    ))
}

/// GET /api/products/category/:category
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<ApiResponse<Vec<ProductDetail>>> {
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let products = repo.find_by_category(&category).await?;
    if products.is_empty() {
        return Err(AppError::not_found("No products found for this category"));
    }
    let count = repo.count_by_category(&category).await?;
    Ok(ApiResponse::list(
        "Products retrieved successfully for the specified category",
        count,
        products,
    ))
}

/// GET /api/products/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProductDetail>> {
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let product = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Product not found"))?;
    Ok(ApiResponse::ok("Product retrieved successfully", product))
}

/// PUT /api/products/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<ProductInput>,
) -> AppResult<ApiResponse<ProductDetail>> {
    payload.validate()?;
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let product = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok("Product updated successfully", product))
}

/// DELETE /api/products/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProductDetail>> {
    let repo = ProductRepository::new(state.db.clone(), state.sequences.clone());
    let product = repo.delete(&id).await?;
    Ok(ApiResponse::ok("Product deleted successfully", product))
}
