//! Brand model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
    validate_status,
};

pub type BrandId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<BrandId>,
    pub brand_code: String,
    pub brand_name: String,
    /// Unix millis; defaults to creation time.
    #[serde(default)]
    pub brand_register_date: i64,
    #[serde(default = "default_active")]
    pub brand_status: i32,
    #[serde(default)]
    pub brand_description: Option<String>,
    #[serde(default)]
    pub brand_image: Option<String>,
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
pub struct BrandInput {
    pub brand_name: String,
    #[serde(default)]
    pub brand_status: Option<i32>,
    #[serde(default)]
    pub brand_description: Option<String>,
    #[serde(default)]
    pub brand_image: Option<String>,
}

impl BrandInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.brand_name, "brand_name", MAX_NAME_LEN)?;
        validate_status(self.brand_status, "brand_status")?;
        validate_optional_text(&self.brand_description, "brand_description", MAX_NOTE_LEN)?;
        validate_optional_text(&self.brand_image, "brand_image", MAX_URL_LEN)
    }
}

/// Projection of a brand reference for enriched product responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandBrief {
    pub brand_name: String,
}
