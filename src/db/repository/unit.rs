//! Unit Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{RepoError, RepoResult, UniqueField, count_records, ensure_unique, parse_id};
use crate::db::models::{Unit, UnitInput};
use crate::db::sequence::{CodeSequences, UNIT};
use crate::utils::time::now_millis;

const TABLE: &str = "unit";
const ENTITY: &str = "Unit";

#[derive(Clone)]
pub struct UnitRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl UnitRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Unit>> {
        let units: Vec<Unit> = self
            .db
            .query("SELECT * FROM unit ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(units)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Unit>> {
        let record_id = parse_id(TABLE, "unit", id)?;
        let unit: Option<Unit> = self.db.select((TABLE, record_id.key().to_string())).await?;
        Ok(unit)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    pub async fn create(&self, data: UnitInput, actor: RecordId) -> RepoResult<Unit> {
        let _guard = self.sequences.lock(UNIT.table).await;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required("name", "name", &data.name)],
            None,
        )
        .await?;

        let code = self.sequences.next_code(&UNIT).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct UnitRow {
            code: String,
            name: String,
            status: i32,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = UnitRow {
            code,
            name: data.name,
            status: data.status.unwrap_or(1),
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Unit> = self.db.create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create unit".to_string()))
    }

    pub async fn update(&self, id: &str, data: UnitInput, actor: RecordId) -> RepoResult<Unit> {
        let record_id = parse_id(TABLE, "unit", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Unit {id} not found")))?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required("name", "name", &data.name)],
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct UnitChanges {
            name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<i32>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = UnitChanges {
            name: data.name,
            status: data.status,
            updated_by: actor,
            updated_at: now_millis(),
        };

        self.db
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record_id.clone()))
            .bind(("data", changes))
            .await?
            .check()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Unit {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Unit> {
        let record_id = parse_id(TABLE, "unit", id)?;
        let deleted: Option<Unit> = self
            .db
            .delete((TABLE, record_id.key().to_string()))
            .await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Unit {id} not found")))
    }
}
