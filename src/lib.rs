//! Inventory Server - multi-tenant inventory/retail management REST API
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── core/     # configuration, state, HTTP server
//! ├── auth/     # JWT authentication
//! ├── api/      # HTTP routes and handlers (one module per resource)
//! ├── db/       # embedded SurrealDB: models, repositories, sequences
//! └── utils/    # errors, envelope, validation, logging
//! ```
//!
//! Every managed resource (branch, supplier, brand, unit, category
//! hierarchy, product, client, staff position) follows the same write
//! path: validate → uniqueness guard → code allocation → persist, with
//! the authenticated caller stamped into `created_by` / `updated_by`.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService, require_auth};
pub use self::core::{Config, Server, ServerState, build_router};
pub use utils::{ApiResponse, AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};
