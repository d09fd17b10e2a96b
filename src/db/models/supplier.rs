//! Supplier model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_email, validate_optional_text, validate_required_text, validate_status,
};

pub type SupplierId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<SupplierId>,
    pub supplier_code: String,
    pub supplier_name: String,
    #[serde(default)]
    pub supplier_email: Option<String>,
    pub supplier_phone: String,
    #[serde(default)]
    pub supplier_city: Option<String>,
    #[serde(default)]
    pub supplier_address: Option<String>,
    #[serde(default)]
    pub supplier_country: Option<String>,
    #[serde(default)]
    pub supplier_organization: Option<String>,
    #[serde(default = "default_active")]
    pub supplier_status: i32,
    #[serde(default)]
    pub supplier_description: Option<String>,
    #[serde(default)]
    pub supplier_website_url: Option<String>,
    #[serde(default)]
    pub supplier_image: Option<String>,
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
pub struct SupplierInput {
    pub supplier_name: String,
    pub supplier_phone: String,
    #[serde(default)]
    pub supplier_email: Option<String>,
    #[serde(default)]
    pub supplier_city: Option<String>,
    #[serde(default)]
    pub supplier_address: Option<String>,
    #[serde(default)]
    pub supplier_country: Option<String>,
    #[serde(default)]
    pub supplier_organization: Option<String>,
    #[serde(default)]
    pub supplier_status: Option<i32>,
    #[serde(default)]
    pub supplier_description: Option<String>,
    #[serde(default)]
    pub supplier_website_url: Option<String>,
    #[serde(default)]
    pub supplier_image: Option<String>,
}

impl SupplierInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.supplier_name, "supplier_name", MAX_NAME_LEN)?;
        validate_required_text(&self.supplier_phone, "supplier_phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_email(&self.supplier_email, "supplier_email")?;
        validate_optional_text(&self.supplier_city, "supplier_city", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.supplier_address, "supplier_address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.supplier_country, "supplier_country", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(
            &self.supplier_organization,
            "supplier_organization",
            MAX_NAME_LEN,
        )?;
        validate_status(self.supplier_status, "supplier_status")?;
        validate_optional_text(
            &self.supplier_description,
            "supplier_description",
            MAX_NOTE_LEN,
        )?;
        validate_optional_text(
            &self.supplier_website_url,
            "supplier_website_url",
            MAX_URL_LEN,
        )?;
        validate_optional_text(&self.supplier_image, "supplier_image", MAX_URL_LEN)
    }
}

/// Projection of a supplier reference for enriched product responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierBrief {
    pub supplier_name: String,
}
