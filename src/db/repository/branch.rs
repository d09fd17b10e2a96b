//! Branch Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{RepoError, RepoResult, UniqueField, count_records, ensure_unique, parse_id};
use crate::db::models::{Branch, BranchInput};
use crate::db::sequence::{BRANCH, CodeSequences};
use crate::utils::time::now_millis;

const TABLE: &str = "branch";
const ENTITY: &str = "Branch";

#[derive(Clone)]
pub struct BranchRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl BranchRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Branch>> {
        let branches: Vec<Branch> = self
            .db
            .query("SELECT * FROM branch ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(branches)
    }

    /// Find branches filtered by status (1 = active, 0 = inactive).
    pub async fn find_by_status(&self, status: i32) -> RepoResult<Vec<Branch>> {
        let branches: Vec<Branch> = self
            .db
            .query("SELECT * FROM branch WHERE branch_status = $status ORDER BY created_at DESC")
            .bind(("status", status))
            .await?
            .take(0)?;
        Ok(branches)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Branch>> {
        let record_id = parse_id(TABLE, "branch", id)?;
        let branch: Option<Branch> = self
            .db
            .select((TABLE, record_id.key().to_string()))
            .await?;
        Ok(branch)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    pub async fn create(&self, data: BranchInput, actor: RecordId) -> RepoResult<Branch> {
        let _guard = self.sequences.lock(BRANCH.table).await;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required("branch_name", "name", &data.branch_name)],
            None,
        )
        .await?;

        let branch_code = self.sequences.next_code(&BRANCH).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct BranchRow {
            branch_code: String,
            branch_name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            branch_address: Option<String>,
            branch_status: i32,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = BranchRow {
            branch_code,
            branch_name: data.branch_name,
            branch_address: data.branch_address,
            branch_status: data.branch_status.unwrap_or(1),
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Branch> = self.db.create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create branch".to_string()))
    }

    /// Update a branch. The code, creator and creation time never change.
    pub async fn update(
        &self,
        id: &str,
        data: BranchInput,
        actor: RecordId,
    ) -> RepoResult<Branch> {
        let record_id = parse_id(TABLE, "branch", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Branch {id} not found")))?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required("branch_name", "name", &data.branch_name)],
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct BranchChanges {
            branch_name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            branch_address: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            branch_status: Option<i32>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = BranchChanges {
            branch_name: data.branch_name,
            branch_address: data.branch_address,
            branch_status: data.branch_status,
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
            .ok_or_else(|| RepoError::NotFound(format!("Branch {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Branch> {
        let record_id = parse_id(TABLE, "branch", id)?;
        let deleted: Option<Branch> = self
            .db
            .delete((TABLE, record_id.key().to_string()))
            .await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Branch {id} not found")))
    }
}
