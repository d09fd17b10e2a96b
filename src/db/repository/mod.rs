//! Repository Module
//!
//! One repository per resource, plus the shared building blocks every
//! resource controller runs through: id parsing, the uniqueness guard and
//! reference existence checks. Code allocation lives in [`crate::db::sequence`].

// Accounts
pub mod user;

// Catalog
pub mod brand;
pub mod parent_category;
pub mod product;
pub mod product_category;
pub mod supplier;
pub mod unit;

// Organization
pub mod branch;
pub mod staff_position;

// People
pub mod client;

// Re-exports
pub use branch::BranchRepository;
pub use brand::BrandRepository;
pub use client::ClientRepository;
pub use parent_category::ParentCategoryRepository;
pub use product::ProductRepository;
pub use product_category::ProductCategoryRepository;
pub use staff_position::StaffPositionRepository;
pub use supplier::SupplierRepository;
pub use unit::UnitRepository;
pub use user::UserRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Invalid reference: {0}")]
    Reference(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key" end to end
// =============================================================================
//
// All record ids are surrealdb::RecordId. The API accepts either the full
// "table:key" form or a bare key; both resolve through parse_id, which also
// rejects ids addressed at the wrong table.

/// Parse an id string into a [`RecordId`] for the given table.
pub fn parse_id(table: &'static str, entity: &str, id: &str) -> RepoResult<RecordId> {
    let record_id: RecordId = if id.contains(':') {
        id.parse()
            .map_err(|_| RepoError::Validation(format!("Invalid {entity} ID format")))?
    } else {
        RecordId::from_table_key(table, id)
    };
    if record_id.table() != table {
        return Err(RepoError::Validation(format!("Invalid {entity} ID format")));
    }
    Ok(record_id)
}

/// Verify that a referenced record exists.
pub async fn ensure_exists(
    db: &Surreal<Db>,
    table: &'static str,
    id: &RecordId,
    entity: &str,
) -> RepoResult<()> {
    let found: Option<serde_json::Value> = db.select((table, id.key().to_string())).await?;
    if found.is_none() {
        return Err(RepoError::Reference(format!("{entity} does not exist")));
    }
    Ok(())
}

/// One candidate field for the uniqueness guard. Declaration order is the
/// tie-break order: when several fields collide at once, the first declared
/// field is the one named in the conflict message.
pub struct UniqueField<'a> {
    pub field: &'static str,
    pub label: &'static str,
    pub value: Option<&'a str>,
}

impl<'a> UniqueField<'a> {
    pub fn required(field: &'static str, label: &'static str, value: &'a str) -> Self {
        Self {
            field,
            label,
            value: Some(value),
        }
    }

    pub fn optional(field: &'static str, label: &'static str, value: &'a Option<String>) -> Self {
        Self {
            field,
            label,
            value: value.as_deref(),
        }
    }
}

/// Uniqueness guard: reject a write that would duplicate any of the given
/// field values, excluding (on update) the record being modified.
///
/// One query ORs all provided fields; if a record matches, the first field
/// in declared order whose value collides is named in the error.
pub async fn ensure_unique(
    db: &Surreal<Db>,
    entity: &str,
    table: &'static str,
    fields: &[UniqueField<'_>],
    exclude: Option<&RecordId>,
) -> RepoResult<()> {
    const KEYS: [&str; 4] = ["v0", "v1", "v2", "v3"];

    let present: Vec<&UniqueField> = fields.iter().filter(|f| f.value.is_some()).collect();
    if present.is_empty() {
        return Ok(());
    }
    debug_assert!(present.len() <= KEYS.len());

    let clauses: Vec<String> = present
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{} = ${}", f.field, KEYS[i]))
        .collect();
    let mut sql = format!("SELECT * FROM {table} WHERE ({})", clauses.join(" OR "));
    if exclude.is_some() {
        sql.push_str(" AND id != $exclude");
    }
    sql.push_str(" LIMIT 1");

    let mut query = db.query(sql);
    for (i, f) in present.iter().enumerate() {
        let value = f.value.unwrap_or_default().to_string();
        query = query.bind((KEYS[i], value));
    }
    if let Some(id) = exclude {
        query = query.bind(("exclude", id.clone()));
    }

    let mut result = query.await?;
    let matches: Vec<serde_json::Value> = result.take(0)?;
    let Some(record) = matches.into_iter().next() else {
        return Ok(());
    };

    for f in &present {
        if record.get(f.field).and_then(|v| v.as_str()) == f.value {
            return Err(RepoError::Duplicate(format!(
                "{} with this {} already exists",
                entity, f.label
            )));
        }
    }

    // A record matched but none of the candidate values line up; should not
    // happen, but never let it pass silently.
    Err(RepoError::Duplicate(format!("{entity} already exists")))
}

/// Total record count for a table.
pub async fn count_records(db: &Surreal<Db>, table: &'static str) -> RepoResult<u64> {
    let mut result = db
        .query(format!("SELECT count() FROM {table} GROUP ALL"))
        .await?;
    let count: Option<u64> = result.take((0, "count"))?;
    Ok(count.unwrap_or(0))
}
