//! API route modules
//!
//! One module per resource, each exposing a `router()` that nests its
//! routes under `/api/<resource>`. Assembled by [`build_app`].

pub mod auth;
pub mod branches;
pub mod brands;
pub mod clients;
pub mod parent_categories;
pub mod product_categories;
pub mod products;
pub mod staff_positions;
pub mod suppliers;
pub mod units;

use axum::Router;
use serde::Deserialize;

use crate::core::ServerState;

/// Pagination query parameters, `?page=&limit=` (page 1, limit 10 default).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl PageQuery {
    const DEFAULT_LIMIT: u64 = 10;
    const MAX_LIMIT: u64 = 100;

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT)
    }
}

/// Build the Axum router (without state or middleware layers).
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Accounts
        .merge(auth::router())
        // Organization
        .merge(branches::router())
        .merge(staff_positions::router())
        // Catalog
        .merge(suppliers::router())
        .merge(brands::router())
        .merge(units::router())
        .merge(parent_categories::router())
        .merge(product_categories::router())
        .merge(products::router())
        // People
        .merge(clients::router())
}
