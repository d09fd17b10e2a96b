//! Staff position model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text, validate_status};

pub type StaffPositionId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffPosition {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<StaffPositionId>,
    pub position_code: String,
    pub position_name: String,
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
pub struct StaffPositionInput {
    pub position_name: String,
    #[serde(default)]
    pub status: Option<i32>,
}

impl StaffPositionInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.position_name, "position_name", MAX_NAME_LEN)?;
        validate_status(self.status, "status")
    }
}
