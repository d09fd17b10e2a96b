//! Client API Handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::api::PageQuery;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Client, ClientInput};
use crate::db::repository::ClientRepository;
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/clients
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<ClientInput>,
) -> AppResult<ApiResponse<Client>> {
    payload.validate()?;
    let repo = ClientRepository::new(state.db.clone(), state.sequences.clone());
    let client = repo.create(payload, user.record_id()?).await?;
    Ok(ApiResponse::created("Client created successfully", client))
}

/// GET /api/clients?page=&limit=
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<PageQuery>,
) -> AppResult<ApiResponse<Vec<Client>>> {
    let repo = ClientRepository::new(state.db.clone(), state.sequences.clone());
    let clients = repo.find_page(params.page(), params.limit()).await?;
    if clients.is_empty() {
        return Err(AppError::not_found("No clients found"));
    }
    let count = repo.count().await?;
    Ok(ApiResponse::list(
        "Clients retrieved successfully",
        count,
        clients,
    ))
}

/// GET /api/clients/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Client>> {
    let repo = ClientRepository::new(state.db.clone(), state.sequences.clone());
    let client = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Client not found"))?;
    Ok(ApiResponse::ok("Client retrieved successfully", client))
}

/// PUT /api/clients/:id
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<ClientInput>,
) -> AppResult<ApiResponse<Client>> {
    payload.validate()?;
    let repo = ClientRepository::new(state.db.clone(), state.sequences.clone());
    let client = repo.update(&id, payload, user.record_id()?).await?;
    Ok(ApiResponse::ok("Client updated successfully", client))
}

/// DELETE /api/clients/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Client>> {
    let repo = ClientRepository::new(state.db.clone(), state.sequences.clone());
    let client = repo.delete(&id).await?;
    Ok(ApiResponse::ok("Client deleted successfully", client))
}
