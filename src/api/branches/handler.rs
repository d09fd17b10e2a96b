//! Branch API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Branch, BranchInput};
use crate::db::repository::BranchRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/branches
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<BranchInput>,
) -> AppResult<ApiResponse<Branch>> {
    payload.validate()?;
    let repo = BranchRepository::new(state.db.clone(), state.sequences.clone());
    let branch = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created("Branch created successfully", branch))
}

/// GET /api/branches
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Branch>>> {
    let repo = BranchRepository::new(state.db.clone(), state.sequences.clone());
    let branches = repo.find_all().await?;
    if branches.is_empty() {
        return Err(AppError::not_found("No branches found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Branches retrieved successfully",
        count,
        branches,
    ))
}

/// GET /api/branches/active
pub async fn list_active(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Branch>>> {
    let repo = BranchRepository::new(state.db.clone(), state.sequences.clone());
    let branches = repo.find_by_status(1).await?;
    if branches.is_empty() {
        return Err(AppError::not_found("No active branches found"));
    }
    let count = branches.len() as u64;
    Ok(ApiResponse::list(
        "Active branches retrieved successfully",
        count,
        branches,
    ))
}

/// GET /api/branches/inactive
pub async fn list_inactive(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<Branch>>> {
    let repo = BranchRepository::new(state.db.clone(), state.sequences.clone());
    let branches = repo.find_by_status(0).await?;
    if branches.is_empty() {
        return Err(AppError::not_found("No inactive branches found"));
    }
    let count = branches.len() as u64;
    Ok(ApiResponse::list(
        "Inactive branches retrieved successfully",
        count,
        branches,
    ))
}

/// GET /api/branches/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Branch>> {
    let repo = BranchRepository::new(state.db.clone(), state.sequences.clone());
    let branch = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Branch not found"))?;
    Ok(ApiResponse::ok("Branch retrieved successfully", branch))
}

/// PUT /api/branches/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<BranchInput>,
) -> AppResult<ApiResponse<Branch>> {
    payload.validate()?;
    let repo = BranchRepository::new(state.db.clone(), state.sequences.clone());
    let branch = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok("Branch updated successfully", branch))
}

/// DELETE /api/branches/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Branch>> {
    let repo = BranchRepository::new(state.db.clone(), state.sequences.clone());
    let branch = repo.delete(&id).await?;
    Ok(ApiResponse::ok("Branch deleted successfully", branch))
}
