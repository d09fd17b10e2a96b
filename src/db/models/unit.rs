//! Unit of measure model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text, validate_status};

pub type UnitId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<UnitId>,
    pub code: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub status: i32,
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

#[derive(Debug, Clone, Deserialize)]
pub struct UnitInput {
    pub name: String,
    #[serde(default)]
    pub status: Option<i32>,
}

impl UnitInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.name, "name", MAX_SHORT_TEXT_LEN)?;
        validate_status(self.status, "status")
    }
}

/// Projection of a unit reference for enriched product responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitBrief {
    pub name: String,
}
