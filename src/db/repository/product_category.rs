//! Product Category Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{
    RepoError, RepoResult, UniqueField, count_records, ensure_exists, ensure_unique, parse_id,
};
use crate::db::models::{ProductCategoryDetail, ProductCategoryInput};
use crate::db::sequence::{CodeSequences, PRODUCT_CATEGORY};
use crate::utils::time::now_millis;

const TABLE: &str = "product_category";
const PARENT_TABLE: &str = "parent_product_category";
const ENTITY: &str = "Product category";

/// Read projection resolving the parent name and the audit user references.
const DETAIL_FIELDS: &str = "*, \
    parent_product_category_id.{parent_product_category_name} AS parent_product_category_id, \
    created_by.{username, email} AS created_by, \
    updated_by.{username, email} AS updated_by";

#[derive(Clone)]
pub struct ProductCategoryRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl ProductCategoryRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<ProductCategoryDetail>> {
        let categories: Vec<ProductCategoryDetail> = self
            .db
            .query(format!(
                "SELECT {DETAIL_FIELDS} FROM product_category ORDER BY created_at DESC"
            ))
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ProductCategoryDetail>> {
        let record_id = parse_id(TABLE, "product category", id)?;
        let mut result = self
            .db
            .query(format!(
                "SELECT {DETAIL_FIELDS} FROM product_category WHERE id = $id"
            ))
            .bind(("id", record_id))
            .await?;
        let categories: Vec<ProductCategoryDetail> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    /// Resolve and verify the parent category reference.
    async fn resolve_parent(&self, id: &str) -> RepoResult<RecordId> {
        let parent_id = parse_id(PARENT_TABLE, "parent product category", id)?;
        ensure_exists(&self.db, PARENT_TABLE, &parent_id, "Parent product category").await?;
        Ok(parent_id)
    }

    pub async fn create(
        &self,
        data: ProductCategoryInput,
        actor: RecordId,
    ) -> RepoResult<ProductCategoryDetail> {
        let parent_id = self.resolve_parent(&data.parent_product_category_id).await?;

        let _guard = self.sequences.lock(PRODUCT_CATEGORY.table).await;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required(
                "product_category_name",
                "name",
                &data.product_category_name,
            )],
            None,
        )
        .await?;

        let product_category_code = self.sequences.next_code(&PRODUCT_CATEGORY).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct ProductCategoryRow {
            product_category_code: String,
            product_category_name: String,
            parent_product_category_id: RecordId,
            product_category_status: i32,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = ProductCategoryRow {
            product_category_code,
            product_category_name: data.product_category_name,
            parent_product_category_id: parent_id,
            product_category_status: data.product_category_status.unwrap_or(1),
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        #[derive(serde::Deserialize)]
        struct CreatedId {
            #[serde(with = "crate::db::models::serde_helpers::record_id")]
            id: RecordId,
        }

        let created: Option<CreatedId> = self.db.create(TABLE).content(row).await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create product category".to_string()))?;

        self.find_by_id(&created.id.to_string())
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create product category".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        data: ProductCategoryInput,
        actor: RecordId,
    ) -> RepoResult<ProductCategoryDetail> {
        let record_id = parse_id(TABLE, "product category", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product category {id} not found")))?;

        let parent_id = self.resolve_parent(&data.parent_product_category_id).await?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required(
                "product_category_name",
                "name",
                &data.product_category_name,
            )],
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct ProductCategoryChanges {
            product_category_name: String,
            parent_product_category_id: RecordId,
            #[serde(skip_serializing_if = "Option::is_none")]
            product_category_status: Option<i32>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = ProductCategoryChanges {
            product_category_name: data.product_category_name,
            parent_product_category_id: parent_id,
            product_category_status: data.product_category_status,
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
            .ok_or_else(|| RepoError::NotFound(format!("Product category {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<ProductCategoryDetail> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product category {id} not found")))?;

        let record_id = parse_id(TABLE, "product category", id)?;
        self.db
            .query("DELETE $thing")
            .bind(("thing", record_id))
            .await?
            .check()?;

        Ok(existing)
    }
}
