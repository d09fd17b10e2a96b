//! Brand API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Brand, BrandInput};
use crate::db::repository::BrandRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/brands
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<BrandInput>,
) -> AppResult<ApiResponse<Brand>> {
    payload.validate()?;
    let repo = BrandRepository::new(state.db.clone(), state.sequences.clone());
    let brand = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created("Brand created successfully", brand))
}

/// GET /api/brands
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Brand>>> {
    let repo = BrandRepository::new(state.db.clone(), state.sequences.clone());
    let brands = repo.find_all().await?;
    if brands.is_empty() {
        return Err(AppError::not_found("No brands found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Brands retrieved successfully",
        count,
        brands,
    ))
}

/// GET /api/brands/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Brand>> {
    let repo = BrandRepository::new(state.db.clone(), state.sequences.clone());
    let brand = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;
    Ok(ApiResponse::ok("Brand retrieved successfully", brand))
}

/// PUT /api/brands/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<BrandInput>,
) -> AppResult<ApiResponse<Brand>> {
    payload.validate()?;
    let repo = BrandRepository::new(state.db.clone(), state.sequences.clone());
    let brand = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok("Brand updated successfully", brand))
}

/// DELETE /api/brands/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Brand>> {
    let repo = BrandRepository::new(state.db.clone(), state.sequences.clone());
    let brand = repo.delete(&id).await?;
    Ok(ApiResponse::ok("Brand deleted successfully", brand))
}
