//! Product category model (second level of the two-level hierarchy)

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::parent_category::ParentCategoryBrief;
use super::serde_helpers;
use super::user::UserBrief;
use crate::utils::AppError;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text, validate_status};

pub type ProductCategoryId = RecordId;

fn default_active() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCategoryInput {
    pub parent_product_category_id: String,
    pub product_category_name: String,
    #[serde(default)]
    pub product_category_status: Option<i32>,
}

impl ProductCategoryInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(
            &self.parent_product_category_id,
            "parent_product_category_id",
            MAX_NAME_LEN,
        )?;
        validate_required_text(
            &self.product_category_name,
            "product_category_name",
            MAX_NAME_LEN,
        )?;
        validate_status(self.product_category_status, "product_category_status")
    }
}

/// Read model with the parent and audit references resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategoryDetail {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ProductCategoryId>,
    pub product_category_code: String,
    pub product_category_name: String,
    #[serde(default)]
    pub parent_product_category_id: Option<ParentCategoryBrief>,
    #[serde(default = "default_active")]
    pub product_category_status: i32,
    #[serde(default)]
    pub created_by: Option<UserBrief>,
    #[serde(default)]
    pub updated_by: Option<UserBrief>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Projection of a product category reference for enriched responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategoryBrief {
    pub product_category_name: String,
}
