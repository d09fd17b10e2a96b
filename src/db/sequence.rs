//! Sequential code allocation
//!
//! Every coded resource carries a human-readable code like `BR-00007`:
//! a fixed prefix plus a per-table integer, zero-padded to five digits
//! (wider values widen the code, they are never truncated).
//!
//! Codes are issued from one persistent counter record per table
//! (`sequence:<table>`), incremented in a single atomic statement, so two
//! concurrent creates can never compute the same value. Create flows are
//! additionally serialized per table behind an async mutex, which closes
//! the guard → allocate → insert window in-process; the UNIQUE index on
//! each code column is the store-level backstop.
//!
//! On startup [`CodeSequences::backfill`] seeds each counter from the
//! largest code already present that strictly matches `PREFIX-<digits>`.
//! Codes that do not match are logged and skipped; the counter is never
//! silently reset to 1 on foreign data.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{info, warn};

use crate::db::repository::{RepoError, RepoResult};

/// A resource type participating in code allocation.
#[derive(Debug, Clone, Copy)]
pub struct CodedResource {
    pub table: &'static str,
    pub prefix: &'static str,
    pub code_field: &'static str,
    pub entity: &'static str,
}

pub const BRANCH: CodedResource = CodedResource {
    table: "branch",
    prefix: "BR",
    code_field: "branch_code",
    entity: "Branch",
};
pub const SUPPLIER: CodedResource = CodedResource {
    table: "supplier",
    prefix: "SUPL",
    code_field: "supplier_code",
    entity: "Supplier",
};
pub const BRAND: CodedResource = CodedResource {
    table: "brand",
    prefix: "BRD",
    code_field: "brand_code",
    entity: "Brand",
};
pub const UNIT: CodedResource = CodedResource {
    table: "unit",
    prefix: "UNI",
    code_field: "code",
    entity: "Unit",
};
pub const PARENT_CATEGORY: CodedResource = CodedResource {
    table: "parent_product_category",
    prefix: "PPC",
    code_field: "parent_product_category_code",
    entity: "Parent product category",
};
pub const PRODUCT_CATEGORY: CodedResource = CodedResource {
    table: "product_category",
    prefix: "PCAT",
    code_field: "product_category_code",
    entity: "Product category",
};
pub const PRODUCT: CodedResource = CodedResource {
    table: "product",
    prefix: "PRD",
    code_field: "code",
    entity: "Product",
};
pub const CLIENT: CodedResource = CodedResource {
    table: "client",
    prefix: "CLI",
    code_field: "client_code",
    entity: "Client",
};
pub const STAFF_POSITION: CodedResource = CodedResource {
    table: "staff_position",
    prefix: "STFP",
    code_field: "position_code",
    entity: "Staff position",
};

/// All coded resources, in backfill order.
pub const CODED_RESOURCES: [&CodedResource; 9] = [
    &BRANCH,
    &SUPPLIER,
    &BRAND,
    &UNIT,
    &PARENT_CATEGORY,
    &PRODUCT_CATEGORY,
    &PRODUCT,
    &CLIENT,
    &STAFF_POSITION,
];

/// Format a counter value as a code. Pads to five digits, never truncates.
pub fn format_code(prefix: &str, value: u64) -> String {
    format!("{prefix}-{value:05}")
}

/// Parse a code that strictly matches `PREFIX-<digits>`.
pub fn parse_code(prefix: &str, code: &str) -> Option<u64> {
    let digits = code.strip_prefix(prefix)?.strip_prefix('-')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[derive(Debug, Deserialize)]
struct SequenceRow {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct CodeRow {
    #[serde(default)]
    code: Option<String>,
}

/// Persistent per-table code counters plus the per-table create locks.
#[derive(Clone, Debug)]
pub struct CodeSequences {
    db: Surreal<Db>,
    locks: Arc<DashMap<&'static str, Arc<Mutex<()>>>>,
}

impl CodeSequences {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            db,
            locks: Arc::new(DashMap::new()),
        }
    }

    /// Serialize create flows for one table. Held across the
    /// guard → allocate → insert sequence.
    pub async fn lock(&self, table: &'static str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(table)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Atomically increment the counter for this resource and return the
    /// formatted code.
    pub async fn next_code(&self, resource: &CodedResource) -> RepoResult<String> {
        let mut result = self
            .db
            .query("UPDATE type::thing('sequence', $table) SET value += 1 RETURN AFTER")
            .bind(("table", resource.table))
            .await?;
        let row: Option<SequenceRow> = result.take(0)?;

        let value = match row {
            Some(row) => row.value,
            None => {
                // First allocation for this table: the counter record does
                // not exist yet.
                let mut created = self
                    .db
                    .query("CREATE type::thing('sequence', $table) SET value = 1 RETURN AFTER")
                    .bind(("table", resource.table))
                    .await?;
                let row: Option<SequenceRow> = created.take(0)?;
                row.map(|r| r.value).ok_or_else(|| {
                    RepoError::Database(format!(
                        "Failed to initialize sequence for {}",
                        resource.table
                    ))
                })?
            }
        };

        Ok(format_code(resource.prefix, value))
    }

    /// Seed counters from codes already in the store.
    ///
    /// For each table, the largest strictly-matching code advances the
    /// counter when the counter is behind. Codes with a foreign or edited
    /// format are reported and ignored; they require an explicit data
    /// migration, not a counter reset.
    pub async fn backfill(&self, resources: &[&CodedResource]) -> RepoResult<()> {
        for resource in resources {
            let mut result = self
                .db
                .query("SELECT value FROM type::thing('sequence', $table)")
                .bind(("table", resource.table))
                .await?;
            let current: Option<SequenceRow> = result.take(0)?;
            let current = current.map(|r| r.value).unwrap_or(0);

            let mut result = self
                .db
                .query(format!(
                    "SELECT {} AS code FROM {}",
                    resource.code_field, resource.table
                ))
                .await?;
            let rows: Vec<CodeRow> = result.take(0)?;

            let mut max_seen = 0u64;
            for row in rows {
                let Some(code) = row.code else { continue };
                match parse_code(resource.prefix, &code) {
                    Some(value) => max_seen = max_seen.max(value),
                    None => warn!(
                        table = resource.table,
                        code = %code,
                        "code does not match the expected pattern, skipped during backfill"
                    ),
                }
            }

            if max_seen > current {
                self.db
                    .query("UPSERT type::thing('sequence', $table) SET value = $value")
                    .bind(("table", resource.table))
                    .bind(("value", max_seen))
                    .await?
                    .check()?;
                info!(
                    table = resource.table,
                    value = max_seen,
                    "sequence counter backfilled from existing codes"
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_five_digit_padding() {
        assert_eq!(format_code("BR", 1), "BR-00001");
        assert_eq!(format_code("SUPL", 42), "SUPL-00042");
        assert_eq!(format_code("PCAT", 99999), "PCAT-99999");
    }

    #[test]
    fn padding_widens_past_five_digits() {
        assert_eq!(format_code("BR", 100000), "BR-100000");
        assert_eq!(format_code("BR", 1234567), "BR-1234567");
    }

    #[test]
    fn parses_only_strictly_matching_codes() {
        assert_eq!(parse_code("BR", "BR-00001"), Some(1));
        assert_eq!(parse_code("BR", "BR-100000"), Some(100000));
        assert_eq!(parse_code("BR", "BRD-00001"), None);
        assert_eq!(parse_code("BR", "BR-"), None);
        assert_eq!(parse_code("BR", "BR-12a"), None);
        assert_eq!(parse_code("BR", "BR-+12"), None);
        assert_eq!(parse_code("BR", "legacy"), None);
    }

    #[test]
    fn prefix_must_be_followed_by_separator() {
        // "BRD-00001" must not parse under the "BR" prefix even though it
        // starts with the same letters.
        assert_eq!(parse_code("BR", "BRX-00001"), None);
        assert_eq!(parse_code("BR", "BR00001"), None);
    }
}
