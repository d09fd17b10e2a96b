//! Client model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_email, validate_optional_text, validate_required_text, validate_status,
};

pub type ClientId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ClientId>,
    pub client_code: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub other_names: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub country_id: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default = "default_active")]
    pub client_status: i32,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub client_photo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
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
pub struct ClientInput {
    pub first_name: String,
    pub phone: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub other_names: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub country_id: Option<i64>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub client_status: Option<i32>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub client_photo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ClientInput {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.first_name, "first_name", MAX_NAME_LEN)?;
        validate_required_text(&self.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.last_name, "last_name", MAX_NAME_LEN)?;
        validate_optional_text(&self.other_names, "other_names", MAX_NAME_LEN)?;
        if let Some(age) = self.age
            && !(0..=150).contains(&age)
        {
            return Err(AppError::validation("age must be between 0 and 150"));
        }
        validate_optional_email(&self.email, "email")?;
        validate_optional_text(&self.profession, "profession", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.address, "address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.website, "website", MAX_URL_LEN)?;
        validate_status(self.client_status, "client_status")?;
        validate_optional_text(&self.organization, "organization", MAX_NAME_LEN)?;
        validate_optional_text(&self.client_photo, "client_photo", MAX_URL_LEN)?;
        validate_optional_text(&self.description, "description", MAX_NOTE_LEN)
    }
}
