//! Parent Product Category Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{RepoError, RepoResult, UniqueField, count_records, ensure_unique, parse_id};
use crate::db::models::{ParentCategory, ParentCategoryInput};
use crate::db::sequence::{CodeSequences, PARENT_CATEGORY};
use crate::utils::time::now_millis;

const TABLE: &str = "parent_product_category";
const ENTITY: &str = "Parent product category";

#[derive(Clone)]
pub struct ParentCategoryRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl ParentCategoryRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<ParentCategory>> {
        let categories: Vec<ParentCategory> = self
            .db
            .query("SELECT * FROM parent_product_category ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ParentCategory>> {
        let record_id = parse_id(TABLE, "parent product category", id)?;
        let category: Option<ParentCategory> = self
            .db
            .select((TABLE, record_id.key().to_string()))
            .await?;
        Ok(category)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    pub async fn create(
        &self,
        data: ParentCategoryInput,
        actor: RecordId,
    ) -> RepoResult<ParentCategory> {
        let _guard = self.sequences.lock(PARENT_CATEGORY.table).await;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required(
                "parent_product_category_name",
                "name",
                &data.parent_product_category_name,
            )],
            None,
        )
        .await?;

        let parent_product_category_code = self.sequences.next_code(&PARENT_CATEGORY).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct ParentCategoryRow {
            parent_product_category_code: String,
            parent_product_category_name: String,
            parent_product_category_status: i32,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = ParentCategoryRow {
            parent_product_category_code,
            parent_product_category_name: data.parent_product_category_name,
            parent_product_category_status: data.parent_product_category_status.unwrap_or(1),
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        let created: Option<ParentCategory> = self.db.create(TABLE).content(row).await?;
        created.ok_or_else(|| {
            RepoError::Database("Failed to create parent product category".to_string())
        })
    }

    pub async fn update(
        &self,
        id: &str,
        data: ParentCategoryInput,
        actor: RecordId,
    ) -> RepoResult<ParentCategory> {
        let record_id = parse_id(TABLE, "parent product category", id)?;
        self.find_by_id(id).await?.ok_or_else(|| {
            RepoError::NotFound(format!("Parent product category {id} not found"))
        })?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required(
                "parent_product_category_name",
                "name",
                &data.parent_product_category_name,
            )],
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct ParentCategoryChanges {
            parent_product_category_name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            parent_product_category_status: Option<i32>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = ParentCategoryChanges {
            parent_product_category_name: data.parent_product_category_name,
            parent_product_category_status: data.parent_product_category_status,
            updated_by: actor,
            updated_at: now_millis(),
        };

        self.db
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record_id.clone()))
            .bind(("data", changes))
            .await?
            .check()?;

        self.find_by_id(id).await?.ok_or_else(|| {
            RepoError::NotFound(format!("Parent product category {id} not found"))
        })
    }

    pub async fn delete(&self, id: &str) -> RepoResult<ParentCategory> {
        let record_id = parse_id(TABLE, "parent product category", id)?;
        let deleted: Option<ParentCategory> = self
            .db
            .delete((TABLE, record_id.key().to_string()))
            .await?;
        deleted.ok_or_else(|| {
            RepoError::NotFound(format!("Parent product category {id} not found"))
        })
    }
}
