//! Supplier Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{RepoError, RepoResult, UniqueField, count_records, ensure_unique, parse_id};
use crate::db::models::{Supplier, SupplierInput};
use crate::db::sequence::{CodeSequences, SUPPLIER};
use crate::utils::time::now_millis;

const TABLE: &str = "supplier";
const ENTITY: &str = "Supplier";

#[derive(Clone)]
pub struct SupplierRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl SupplierRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Supplier>> {
        let suppliers: Vec<Supplier> = self
            .db
            .query("SELECT * FROM supplier ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(suppliers)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Supplier>> {
        let record_id = parse_id(TABLE, "supplier", id)?;
        let supplier: Option<Supplier> = self
            .db
            .select((TABLE, record_id.key().to_string()))
            .await?;
        Ok(supplier)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    /// Guard fields in tie-break order: phone first, then email.
    fn unique_fields(data: &SupplierInput) -> [UniqueField<'_>; 2] {
        [
            UniqueField::required("supplier_phone", "phone number", &data.supplier_phone),
            UniqueField::optional("supplier_email", "email", &data.supplier_email),
        ]
    }

    pub async fn create(&self, data: SupplierInput, actor: RecordId) -> RepoResult<Supplier> {
        let _guard = self.sequences.lock(SUPPLIER.table).await;

        ensure_unique(&self.db, ENTITY, TABLE, &Self::unique_fields(&data), None).await?;

        let supplier_code = self.sequences.next_code(&SUPPLIER).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct SupplierRow {
            supplier_code: String,
            supplier_name: String,
            supplier_phone: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_city: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_address: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_country: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_organization: Option<String>,
            supplier_status: i32,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_website_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_image: Option<String>,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = SupplierRow {
            supplier_code,
            supplier_name: data.supplier_name,
            supplier_phone: data.supplier_phone,
            supplier_email: data.supplier_email,
            supplier_city: data.supplier_city,
            supplier_address: data.supplier_address,
            supplier_country: data.supplier_country,
            supplier_organization: data.supplier_organization,
            supplier_status: data.supplier_status.unwrap_or(1),
            supplier_description: data.supplier_description,
            supplier_website_url: data.supplier_website_url,
            supplier_image: data.supplier_image,
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Supplier> = self.db.create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create supplier".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        data: SupplierInput,
        actor: RecordId,
    ) -> RepoResult<Supplier> {
        let record_id = parse_id(TABLE, "supplier", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Supplier {id} not found")))?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &Self::unique_fields(&data),
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct SupplierChanges {
            supplier_name: String,
            supplier_phone: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_city: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_address: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_country: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_organization: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_status: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_website_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            supplier_image: Option<String>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = SupplierChanges {
            supplier_name: data.supplier_name,
            supplier_phone: data.supplier_phone,
            supplier_email: data.supplier_email,
            supplier_city: data.supplier_city,
            supplier_address: data.supplier_address,
            supplier_country: data.supplier_country,
            supplier_organization: data.supplier_organization,
            supplier_status: data.supplier_status,
            supplier_description: data.supplier_description,
            supplier_website_url: data.supplier_website_url,
            supplier_image: data.supplier_image,
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
            .ok_or_else(|| RepoError::NotFound(format!("Supplier {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Supplier> {
        let record_id = parse_id(TABLE, "supplier", id)?;
        let deleted: Option<Supplier> = self
            .db
            .delete((TABLE, record_id.key().to_string()))
            .await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Supplier {id} not found")))
    }
}
