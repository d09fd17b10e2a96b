//! Product model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::branch::BranchBrief;
use super::brand::BrandBrief;
use super::parent_category::ParentCategoryBrief;
use super::product_category::ProductCategoryBrief;
use super::serde_helpers;
use super::supplier::SupplierBrief;
use super::unit::UnitBrief;
use super::user::UserBrief;
use crate::utils::AppError;
use crate::utils::time::parse_date;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
    validate_status,
};

pub type ProductId = RecordId;

fn default_active() -> i32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub supplier_id: String,
    pub brand_id: String,
    pub branch_id: String,
    pub parent_product_category_id: String,
    pub product_category_id: String,
    pub unit_id: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub stock_alert: Option<i64>,
    #[serde(default)]
    pub cost_price: Option<Decimal>,
    #[serde(default)]
    pub selling_price: Option<Decimal>,
    #[serde(default)]
    pub status: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub image_gallery: Option<Vec<String>>,
}

impl ProductInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&self.supplier_id, "supplier_id", MAX_NAME_LEN)?;
        validate_required_text(&self.brand_id, "brand_id", MAX_NAME_LEN)?;
        validate_required_text(&self.branch_id, "branch_id", MAX_NAME_LEN)?;
        validate_required_text(
            &self.parent_product_category_id,
            "parent_product_category_id",
            MAX_NAME_LEN,
        )?;
        validate_required_text(&self.product_category_id, "product_category_id", MAX_NAME_LEN)?;
        validate_required_text(&self.unit_id, "unit_id", MAX_NAME_LEN)?;
        if let Some(ref date) = self.expiry_date {
            parse_date(date)?;
        }
        if let Some(qty) = self.stock_quantity
            && qty < 0
        {
            return Err(AppError::validation("stock_quantity cannot be negative"));
        }
        if let Some(alert) = self.stock_alert
            && alert < 0
        {
            return Err(AppError::validation("stock_alert cannot be negative"));
        }
        if let Some(cost) = self.cost_price
            && cost < Decimal::ZERO
        {
            return Err(AppError::validation("cost_price cannot be negative"));
        }
        if let Some(selling) = self.selling_price
            && selling < Decimal::ZERO
        {
            return Err(AppError::validation("selling_price cannot be negative"));
        }
        if let (Some(cost), Some(selling)) = (self.cost_price, self.selling_price)
            && selling <= cost
        {
            return Err(AppError::validation(
                "selling_price must be greater than cost_price",
            ));
        }
        validate_status(self.status, "status")?;
        validate_optional_text(&self.description, "description", MAX_NOTE_LEN)?;
        validate_optional_text(&self.featured_image, "featured_image", MAX_URL_LEN)
    }
}

/// Read model with every reference resolved to a display subset.
///
/// References that point at deleted records come back as `None`; dangling
/// links are allowed, deletes do not cascade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ProductId>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub supplier_id: Option<SupplierBrief>,
    #[serde(default)]
    pub brand_id: Option<BrandBrief>,
    #[serde(default)]
    pub branch_id: Option<BranchBrief>,
    #[serde(default)]
    pub parent_product_category_id: Option<ParentCategoryBrief>,
    #[serde(default)]
    pub product_category_id: Option<ProductCategoryBrief>,
    #[serde(default)]
    pub unit_id: Option<UnitBrief>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub stock_alert: Option<i64>,
    #[serde(default)]
    pub cost_price: Option<Decimal>,
    #[serde(default)]
    pub selling_price: Option<Decimal>,
    #[serde(default = "default_active")]
    pub status: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub image_gallery: Option<Vec<String>>,
    #[serde(default)]
    pub created_by: Option<UserBrief>,
    #[serde(default)]
    pub updated_by: Option<UserBrief>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
