//! Database schema definitions
//!
//! Applied idempotently at startup. Unique indexes back the uniqueness
//! guard at the store level: the guard gives the friendly field-specific
//! message, the index is the final arbiter under concurrency.
//!
//! Optional fields (e.g. client email) carry no unique index, since
//! absent values would collide with each other; they are enforced by
//! the guard alone.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::RepoResult;

const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS sequence SCHEMALESS;

    DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS user_username_unique ON user FIELDS username UNIQUE;
    DEFINE INDEX IF NOT EXISTS user_email_unique ON user FIELDS email UNIQUE;

    DEFINE TABLE IF NOT EXISTS branch SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS branch_code_unique ON branch FIELDS branch_code UNIQUE;
    DEFINE INDEX IF NOT EXISTS branch_name_unique ON branch FIELDS branch_name UNIQUE;

    DEFINE TABLE IF NOT EXISTS supplier SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS supplier_code_unique ON supplier FIELDS supplier_code UNIQUE;
    DEFINE INDEX IF NOT EXISTS supplier_phone_unique ON supplier FIELDS supplier_phone UNIQUE;

    DEFINE TABLE IF NOT EXISTS brand SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS brand_code_unique ON brand FIELDS brand_code UNIQUE;
    DEFINE INDEX IF NOT EXISTS brand_name_unique ON brand FIELDS brand_name UNIQUE;

    DEFINE TABLE IF NOT EXISTS unit SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS unit_code_unique ON unit FIELDS code UNIQUE;
    DEFINE INDEX IF NOT EXISTS unit_name_unique ON unit FIELDS name UNIQUE;

    DEFINE TABLE IF NOT EXISTS parent_product_category SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS parent_category_code_unique ON parent_product_category FIELDS parent_product_category_code UNIQUE;
    DEFINE INDEX IF NOT EXISTS parent_category_name_unique ON parent_product_category FIELDS parent_product_category_name UNIQUE;

    DEFINE TABLE IF NOT EXISTS product_category SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS product_category_code_unique ON product_category FIELDS product_category_code UNIQUE;
    DEFINE INDEX IF NOT EXISTS product_category_name_unique ON product_category FIELDS product_category_name UNIQUE;

    DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS product_code_unique ON product FIELDS code UNIQUE;
    DEFINE INDEX IF NOT EXISTS product_name_unique ON product FIELDS name UNIQUE;

    DEFINE TABLE IF NOT EXISTS client SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS client_code_unique ON client FIELDS client_code UNIQUE;
    DEFINE INDEX IF NOT EXISTS client_phone_unique ON client FIELDS phone UNIQUE;

    DEFINE TABLE IF NOT EXISTS staff_position SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS staff_position_code_unique ON staff_position FIELDS position_code UNIQUE;
    DEFINE INDEX IF NOT EXISTS staff_position_name_unique ON staff_position FIELDS position_name UNIQUE;
";

/// Apply all table and index definitions.
pub async fn apply_schema(db: &Surreal<Db>) -> RepoResult<()> {
    db.query(SCHEMA).await?.check()?;
    Ok(())
}
