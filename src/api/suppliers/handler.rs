//! Supplier API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Supplier, SupplierInput};
use crate::db::repository::SupplierRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/suppliers
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<SupplierInput>,
) -> AppResult<ApiResponse<Supplier>> {
    payload.validate()?;
    let repo = SupplierRepository::new(state.db.clone(), state.sequences.clone());
    let supplier = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created(
        "Supplier created successfully",
        supplier,
    ))
}

/// GET /api/suppliers
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Supplier>>> {
    let repo = SupplierRepository::new(state.db.clone(), state.sequences.clone());
    let suppliers = repo.find_all().await?;
    if suppliers.is_empty() {
        return Err(AppError::not_found("No suppliers found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Suppliers retrieved successfully",
        count,
        suppliers,
    ))
}

/// GET /api/suppliers/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Supplier>> {
    let repo = SupplierRepository::new(state.db.clone(), state.sequences.clone());
    let supplier = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Supplier not found"))?;
    Ok(ApiResponse::ok("Supplier retrieved successfully", supplier))
}

/// PUT /api/suppliers/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<SupplierInput>,
) -> AppResult<ApiResponse<Supplier>> {
    payload.validate()?;
    let repo = SupplierRepository::new(state.db.clone(), state.sequences.clone());
    let supplier = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok("Supplier updated successfully", supplier))
}

/// DELETE /api/suppliers/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Supplier>> {
    let repo = SupplierRepository::new(state.db.clone(), state.sequences.clone());
    let supplier = repo.delete(&id).await?;
    Ok(ApiResponse::ok("Supplier deleted successfully", supplier))
}
