//! Product Category API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{ProductCategoryDetail, ProductCategoryInput};
use crate::db::repository::ProductCategoryRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/product-categories
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ProductCategoryInput>,
) -> AppResult<ApiResponse<ProductCategoryDetail>> {
    payload.validate()?;
    let repo = ProductCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let category = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created(
        "Product category created successfully",
        category,
    ))
}

/// GET /api/product-categories
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<ProductCategoryDetail>>> {
    let repo = ProductCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let categories = repo.find_all().await?;
    if categories.is_empty() {
        return Err(AppError::not_found("No product categories found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Product categories retrieved successfully",
        count,
        categories,
    ))
}

/// GET /api/product-categories/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProductCategoryDetail>> {
    let repo = ProductCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Product category not found"))?;
    Ok(ApiResponse::ok(
        "Product category retrieved successfully",
        category,
    ))
}

/// PUT /api/product-categories/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<ProductCategoryInput>,
) -> AppResult<ApiResponse<ProductCategoryDetail>> {
    payload.validate()?;
    let repo = ProductCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let category = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok(
        "Product category updated successfully",
        category,
    ))
}

/// DELETE /api/product-categories/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ProductCategoryDetail>> {
    let repo = ProductCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let category = repo.delete(&id).await?;
    Ok(ApiResponse::ok(
        "Product category deleted successfully",
        category,
    ))
}
