//! Staff Position API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{StaffPosition, StaffPositionInput};
use crate::db::repository::StaffPositionRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/staff-positions
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<StaffPositionInput>,
) -> AppResult<ApiResponse<StaffPosition>> {
    payload.validate()?;
    let repo = StaffPositionRepository::new(state.db.clone(), state.sequences.clone());
    let position = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created(
        "Staff position created successfully",
        position,
    ))
}

/// GET /api/staff-positions
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<StaffPosition>>> {
    let repo = StaffPositionRepository::new(state.db.clone(), state.sequences.clone());
    let positions = repo.find_all().await?;
    if positions.is_empty() {
        return Err(AppError::not_found("No staff positions found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Staff positions retrieved successfully",
        count,
        positions,
    ))
}

/// GET /api/staff-positions/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<StaffPosition>> {
    let repo = StaffPositionRepository::new(state.db.clone(), state.sequences.clone());
    let position = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Staff position not found"))?;
    Ok(ApiResponse::ok(
        "Staff position retrieved successfully",
        position,
    ))
}

/// PUT /api/staff-positions/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<StaffPositionInput>,
) -> AppResult<ApiResponse<StaffPosition>> {
    payload.validate()?;
    let repo = StaffPositionRepository::new(state.db.clone(), state.sequences.clone());
    let position = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok(
        "Staff position updated successfully",
        position,
    ))
}

/// DELETE /api/staff-positions/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<StaffPosition>> {
    let repo = StaffPositionRepository::new(state.db.clone(), state.sequences.clone());
    let position = repo.delete(&id).await?;
    Ok(ApiResponse::ok(
        "Staff position deleted successfully",
        position,
    ))
}
