//! Parent product category model (top level of the two-level hierarchy)

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text, validate_status};

pub type ParentCategoryId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentCategory {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ParentCategoryId>,
    pub parent_product_category_code: String,
    pub parent_product_category_name: String,
    #[serde(default = "default_active")]
    pub parent_product_category_status: i32,
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
pub struct ParentCategoryInput {
    pub parent_product_category_name: String,
    #[serde(default)]
    pub parent_product_category_status: Option<i32>,
}

impl ParentCategoryInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(
            &self.parent_product_category_name,
            "parent_product_category_name",
            MAX_NAME_LEN,
        )?;
        validate_status(
            self.parent_product_category_status,
            "parent_product_category_status",
        )
    }
}

/// Projection of a parent category reference for enriched responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentCategoryBrief {
    pub parent_product_category_name: String,
}
