//! Parent Product Category API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{ParentCategory, ParentCategoryInput};
use crate::db::repository::ParentCategoryRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/parent-product-categories
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ParentCategoryInput>,
) -> AppResult<ApiResponse<ParentCategory>> {
    payload.validate()?;
    let repo = ParentCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let category = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created(
        "Parent product category created successfully",
        category,
    ))
}

/// GET /api/parent-product-categories
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<ParentCategory>>> {
    let repo = ParentCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let categories = repo.find_all().await?;
    if categories.is_empty() {
        return Err(AppError::not_found("No parent product categories found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Parent product categories retrieved successfully",
        count,
        categories,
    ))
}

/// GET /api/parent-product-categories/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ParentCategory>> {
    let repo = ParentCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let category = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Parent product category not found"))?;
    Ok(ApiResponse::ok(
        "Parent product category retrieved successfully",
        category,
    ))
}

/// PUT /api/parent-product-categories/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<ParentCategoryInput>,
) -> AppResult<ApiResponse<ParentCategory>> {
    payload.validate()?;
    let repo = ParentCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let category = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok(
        "Parent product category updated successfully",
        category,
    ))
}

/// DELETE /api/parent-product-categories/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<ParentCategory>> {
    let repo = ParentCategoryRepository::new(state.db.clone(), state.sequences.clone());
    let category = repo.delete(&id).await?;
    Ok(ApiResponse::ok(
        "Parent product category deleted successfully",
        category,
    ))
}
