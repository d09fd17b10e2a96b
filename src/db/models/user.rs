//! User account model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;
use crate::utils::AppError;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, validate_email, validate_required_text,
};

pub type UserId = RecordId;

/// User account. The argon2 password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<UserId>,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Projection of a user reference for enriched read responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBrief {
    pub username: String,
    pub email: String,
}

/// Registration payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRegister {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserRegister {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_required_text(&self.username, "username", MAX_NAME_LEN)?;
        validate_email(&self.email, "email")?;
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        if self.password.len() > MAX_PASSWORD_LEN {
            return Err(AppError::validation(format!(
                "password is too long (max {MAX_PASSWORD_LEN} characters)"
            )));
        }
        Ok(())
    }
}

/// Login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct UserLogin {
    pub email: String,
    pub password: String,
}

impl User {
    /// Verify a candidate password against the stored argon2 hash.
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using argon2 with a fresh salt.
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
