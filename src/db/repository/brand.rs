//! Brand Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{RepoError, RepoResult, UniqueField, count_records, ensure_unique, parse_id};
use crate::db::models::{Brand, BrandInput};
use crate::db::sequence::{BRAND, CodeSequences};
use crate::utils::time::now_millis;

const TABLE: &str = "brand";
const ENTITY: &str = "Brand";

#[derive(Clone)]
pub struct BrandRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl BrandRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Brand>> {
        let brands: Vec<Brand> = self
            .db
            .query("SELECT * FROM brand ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(brands)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Brand>> {
        let record_id = parse_id(TABLE, "brand", id)?;
        let brand: Option<Brand> = self
            .db
            .select((TABLE, record_id.key().to_string()))
            .await?;
        Ok(brand)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    pub async fn create(&self, data: BrandInput, actor: RecordId) -> RepoResult<Brand> {
        let _guard = self.sequences.lock(BRAND.table).await;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required("brand_name", "name", &data.brand_name)],
            None,
        )
        .await?;

        let brand_code = self.sequences.next_code(&BRAND).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct BrandRow {
            brand_code: String,
            brand_name: String,
            brand_register_date: i64,
            brand_status: i32,
            #[serde(skip_serializing_if = "Option::is_none")]
            brand_description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            brand_image: Option<String>,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = BrandRow {
            brand_code,
            brand_name: data.brand_name,
            brand_register_date: now,
            brand_status: data.brand_status.unwrap_or(1),
            brand_description: data.brand_description,
            brand_image: data.brand_image,
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Brand> = self.db.create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create brand".to_string()))
    }

    pub async fn update(&self, id: &str, data: BrandInput, actor: RecordId) -> RepoResult<Brand> {
        let record_id = parse_id(TABLE, "brand", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Brand {id} not found")))?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required("brand_name", "name", &data.brand_name)],
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct BrandChanges {
            brand_name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            brand_status: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            brand_description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            brand_image: Option<String>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = BrandChanges {
            brand_name: data.brand_name,
            brand_status: data.brand_status,
            brand_description: data.brand_description,
            brand_image: data.brand_image,
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
            .ok_or_else(|| RepoError::NotFound(format!("Brand {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Brand> {
        let record_id = parse_id(TABLE, "brand", id)?;
        let deleted: Option<Brand> = self
            .db
            .delete((TABLE, record_id.key().to_string()))
            .await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Brand {id} not found")))
    }
}
