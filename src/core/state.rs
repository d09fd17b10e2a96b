//! Server state
//!
//! [`ServerState`] holds shared references to every service a handler
//! needs: the embedded database, the JWT service and the code sequence
//! counters. Cloning is shallow.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::sequence::CodeSequences;
use crate::utils::AppError;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    /// Embedded database (SurrealDB).
    pub db: Surreal<Db>,
    /// JWT service (shared).
    pub jwt_service: Arc<JwtService>,
    /// Per-table code counters and create locks.
    pub sequences: CodeSequences,
}

impl ServerState {
    /// Initialize all services: working directory, database (with schema
    /// and sequence backfill), JWT.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        let db_service = DbService::new(&config.database_path()).await?;
        let db = db_service.db;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let sequences = CodeSequences::new(db.clone());

        Ok(Self {
            config: config.clone(),
            db,
            jwt_service,
            sequences,
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
