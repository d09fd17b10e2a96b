//! Staff Position Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{RepoError, RepoResult, UniqueField, count_records, ensure_unique, parse_id};
use crate::db::models::{StaffPosition, StaffPositionInput};
use crate::db::sequence::{CodeSequences, STAFF_POSITION};
use crate::utils::time::now_millis;

const TABLE: &str = "staff_position";
const ENTITY: &str = "Staff position";

#[derive(Clone)]
pub struct StaffPositionRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl StaffPositionRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<StaffPosition>> {
        let positions: Vec<StaffPosition> = self
            .db
            .query("SELECT * FROM staff_position ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(positions)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<StaffPosition>> {
        let record_id = parse_id(TABLE, "staff position", id)?;
        let position: Option<StaffPosition> = self
            .db
            .select((TABLE, record_id.key().to_string()))
            .await?;
        Ok(position)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    pub async fn create(
        &self,
        data: StaffPositionInput,
        actor: RecordId,
    ) -> RepoResult<StaffPosition> {
        let _guard = self.sequences.lock(STAFF_POSITION.table).await;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required(
                "position_name",
                "name",
                &data.position_name,
            )],
            None,
        )
        .await?;

        let position_code = self.sequences.next_code(&STAFF_POSITION).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct StaffPositionRow {
            position_code: String,
            position_name: String,
            status: i32,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = StaffPositionRow {
            position_code,
            position_name: data.position_name,
            status: data.status.unwrap_or(1),
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        let created: Option<StaffPosition> = self.db.create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create staff position".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        data: StaffPositionInput,
        actor: RecordId,
    ) -> RepoResult<StaffPosition> {
        let record_id = parse_id(TABLE, "staff position", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Staff position {id} not found")))?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required(
                "position_name",
                "name",
                &data.position_name,
            )],
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct StaffPositionChanges {
            position_name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<i32>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = StaffPositionChanges {
            position_name: data.position_name,
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
            .ok_or_else(|| RepoError::NotFound(format!("Staff position {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<StaffPosition> {
        let record_id = parse_id(TABLE, "staff position", id)?;
        let deleted: Option<StaffPosition> = self
            .db
            .delete((TABLE, record_id.key().to_string()))
            .await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Staff position {id} not found")))
    }
}
