//! Product Repository

use rust_decimal::Decimal;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{
    RepoError, RepoResult, UniqueField, count_records, ensure_exists, ensure_unique, parse_id,
};
use crate::db::models::{ProductDetail, ProductInput};
use crate::db::sequence::{CodeSequences, PRODUCT};
use crate::utils::time::now_millis;

const TABLE: &str = "product";
const ENTITY: &str = "Product";

/// Read projection resolving every reference to its display subset.
/// Dangling references resolve to NONE; deletes do not cascade.
const DETAIL_FIELDS: &str = "*, \
    supplier_id.{supplier_name} AS supplier_id, \
    brand_id.{brand_name} AS brand_id, \
    branch_id.{branch_name} AS branch_id, \
    parent_product_category_id.{parent_product_category_name} AS parent_product_category_id, \
    product_category_id.{product_category_name} AS product_category_id, \
    unit_id.{name} AS unit_id, \
    created_by.{username, email} AS created_by, \
    updated_by.{username, email} AS updated_by";

/// The six record links a product carries, resolved from input strings.
struct ProductRefs {
    supplier_id: RecordId,
    brand_id: RecordId,
    branch_id: RecordId,
    parent_product_category_id: RecordId,
    product_category_id: RecordId,
    unit_id: RecordId,
}

#[derive(Clone)]
pub struct ProductRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    /// Paginated listing, newest first.
    pub async fn find_page(&self, page: u64, limit: u64) -> RepoResult<Vec<ProductDetail>> {
        let start = (page.saturating_sub(1)) * limit;
        let products: Vec<ProductDetail> = self
            .db
            .query(format!(
                "SELECT {DETAIL_FIELDS} FROM product ORDER BY created_at DESC LIMIT $limit START $start"
            ))
            .bind(("limit", limit))
            .bind(("start", start))
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<ProductDetail>> {
        let category = parse_id("product_category", "product category", category_id)?;
        let products: Vec<ProductDetail> = self
            .db
            .query(format!(
                "SELECT {DETAIL_FIELDS} FROM product WHERE product_category_id = $category ORDER BY created_at DESC"
            ))
            .bind(("category", category))
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn count_by_category(&self, category_id: &str) -> RepoResult<u64> {
        let category = parse_id("product_category", "product category", category_id)?;
        let mut result = self
            .db
            .query("SELECT count() FROM product WHERE product_category_id = $category GROUP ALL")
            .bind(("category", category))
            .await?;
        let count: Option<u64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ProductDetail>> {
        let record_id = parse_id(TABLE, "product", id)?;
        let mut result = self
            .db
            .query(format!("SELECT {DETAIL_FIELDS} FROM product WHERE id = $id"))
            .bind(("id", record_id))
            .await?;
        let products: Vec<ProductDetail> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    /// Parse all six references and verify each points at an existing record.
    async fn resolve_refs(&self, data: &ProductInput) -> RepoResult<ProductRefs> {
        let supplier_id = parse_id("supplier", "supplier", &data.supplier_id)?;
        let brand_id = parse_id("brand", "brand", &data.brand_id)?;
        let branch_id = parse_id("branch", "branch", &data.branch_id)?;
        let parent_product_category_id = parse_id(
            "parent_product_category",
            "parent product category",
            &data.parent_product_category_id,
        )?;
        let product_category_id =
            parse_id("product_category", "product category", &data.product_category_id)?;
        let unit_id = parse_id("unit", "unit", &data.unit_id)?;

        ensure_exists(&self.db, "supplier", &supplier_id, "Supplier").await?;
        ensure_exists(&self.db, "brand", &brand_id, "Brand").await?;
        ensure_exists(&self.db, "branch", &branch_id, "Branch").await?;
        ensure_exists(
            &self.db,
            "parent_product_category",
            &parent_product_category_id,
            "Parent product category",
        )
        .await?;
        ensure_exists(
            &self.db,
            "product_category",
            &product_category_id,
            "Product category",
        )
        .await?;
        ensure_exists(&self.db, "unit", &unit_id, "Unit").await?;

        Ok(ProductRefs {
            supplier_id,
            brand_id,
            branch_id,
            parent_product_category_id,
            product_category_id,
            unit_id,
        })
    }

    pub async fn create(&self, data: ProductInput, actor: RecordId) -> RepoResult<ProductDetail> {
        let refs = self.resolve_refs(&data).await?;

        let _guard = self.sequences.lock(PRODUCT.table).await;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required("name", "name", &data.name)],
            None,
        )
        .await?;

        let code = self.sequences.next_code(&PRODUCT).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct ProductRow {
            code: String,
            name: String,
            supplier_id: RecordId,
            brand_id: RecordId,
            branch_id: RecordId,
            parent_product_category_id: RecordId,
            product_category_id: RecordId,
            unit_id: RecordId,
            #[serde(skip_serializing_if = "Option::is_none")]
            expiry_date: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            stock_quantity: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            stock_alert: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            cost_price: Option<Decimal>,
            #[serde(skip_serializing_if = "Option::is_none")]
            selling_price: Option<Decimal>,
            status: i32,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            featured_image: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image_gallery: Option<Vec<String>>,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = ProductRow {
            code,
            name: data.name,
            supplier_id: refs.supplier_id,
            brand_id: refs.brand_id,
            branch_id: refs.branch_id,
            parent_product_category_id: refs.parent_product_category_id,
            product_category_id: refs.product_category_id,
            unit_id: refs.unit_id,
            expiry_date: data.expiry_date,
            stock_quantity: data.stock_quantity,
            stock_alert: data.stock_alert,
            cost_price: data.cost_price,
            selling_price: data.selling_price,
            status: data.status.unwrap_or(1),
            description: data.description,
            featured_image: data.featured_image,
            image_gallery: data.image_gallery,
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
            created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))?;

        self.find_by_id(&created.id.to_string())
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    pub async fn update(
        &self,
        id: &str,
        data: ProductInput,
        actor: RecordId,
    ) -> RepoResult<ProductDetail> {
        let record_id = parse_id(TABLE, "product", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))?;

        let refs = self.resolve_refs(&data).await?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[UniqueField::required("name", "name", &data.name)],
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct ProductChanges {
            name: String,
            supplier_id: RecordId,
            brand_id: RecordId,
            branch_id: RecordId,
            parent_product_category_id: RecordId,
            product_category_id: RecordId,
            unit_id: RecordId,
            #[serde(skip_serializing_if = "Option::is_none")]
            expiry_date: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            stock_quantity: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            stock_alert: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            cost_price: Option<Decimal>,
            #[serde(skip_serializing_if = "Option::is_none")]
            selling_price: Option<Decimal>,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            featured_image: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image_gallery: Option<Vec<String>>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = ProductChanges {
            name: data.name,
            supplier_id: refs.supplier_id,
            brand_id: refs.brand_id,
            branch_id: refs.branch_id,
            parent_product_category_id: refs.parent_product_category_id,
            product_category_id: refs.product_category_id,
            unit_id: refs.unit_id,
            expiry_date: data.expiry_date,
            stock_quantity: data.stock_quantity,
            stock_alert: data.stock_alert,
            cost_price: data.cost_price,
            selling_price: data.selling_price,
            status: data.status,
            description: data.description,
            featured_image: data.featured_image,
            image_gallery: data.image_gallery,
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
            .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<ProductDetail> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {id} not found")))?;

        let record_id = parse_id(TABLE, "product", id)?;
        self.db
            .query("DELETE $thing")
            .bind(("thing", record_id))
            .await?
            .check()?;

        Ok(existing)
    }
}
