//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend): connection setup, schema
//! definitions and the code sequence counters.

pub mod models;
pub mod repository;
pub mod schema;
pub mod sequence;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;
use sequence::{CODED_RESOURCES, CodeSequences};

const NAMESPACE: &str = "inventory";
const DATABASE: &str = "main";

/// Database service — owns the embedded SurrealDB handle.
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database, apply schema definitions and backfill
    /// the code sequence counters from any pre-existing records.
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        schema::apply_schema(&db)
            .await
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        let sequences = CodeSequences::new(db.clone());
        sequences
            .backfill(&CODED_RESOURCES)
            .await
            .map_err(|e| AppError::database(format!("Failed to backfill sequences: {e}")))?;

        tracing::info!(path = %db_path.display(), "Database ready");

        Ok(Self { db })
    }
}
