//! Unit API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Unit, UnitInput};
use crate::db::repository::UnitRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/units
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<UnitInput>,
) -> AppResult<ApiResponse<Unit>> {
    payload.validate()?;
    let repo = UnitRepository::new(state.db.clone(), state.sequences.clone());
    let unit = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created("Unit created successfully", unit))
}

/// GET /api/units
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Unit>>> {
    let repo = UnitRepository::new(state.db.clone(), state.sequences.clone());
    let units = repo.find_all().await?;
    if units.is_empty() {
        return Err(AppError::not_found("No units found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Units retrieved successfully",
        count,
        units,
    ))
}

/// GET /api/units/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Unit>> {
    let repo = UnitRepository::new(state.db.clone(), state.sequences.clone());
    let unit = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Unit not found"))?;
    Ok(ApiResponse::ok("Unit retrieved successfully", unit))
}

/// PUT /api/units/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<UnitInput>,
) -> AppResult<ApiResponse<Unit>> {
    payload.validate()?;
    let repo = UnitRepository::new(state.db.clone(), state.sequences.clone());
    let unit = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok("Unit updated successfully", unit))
}

/// DELETE /api/units/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Unit>> {
    let repo = UnitRepository::new(state.db.clone(), state.sequences.clone());
    let unit = repo.delete(&id).await?;
    Ok(ApiResponse::ok("Unit deleted successfully", unit))
}
