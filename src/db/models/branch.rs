//! Branch model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, validate_optional_text, validate_required_text, validate_status,
};

pub type BranchId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<BranchId>,
    pub branch_code: String,
    pub branch_name: String,
    #[serde(default)]
    pub branch_address: Option<String>,
    #[serde(default = "default_active")]
    pub branch_status: i32,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub created_by: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub updated_by: Option<RecordId>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_active() -> i32 {
    1
}

/// Create/update payload. The code, audit references and timestamps are
/// assigned by the repository, never accepted from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchInput {
    pub branch_name: String,
    #[serde(default)]
    pub branch_address: Option<String>,
    #[serde(default)]
    pub branch_status: Option<i32>,
}

impl BranchInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.branch_name, "branch_name", MAX_NAME_LEN)?;
        validate_optional_text(&self.branch_address, "branch_address", MAX_ADDRESS_LEN)?;
        validate_status(self.branch_status, "branch_status")
    }
}

/// Projection of a branch reference for enriched product responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchBrief {
    pub branch_name: String,
}
