//! User Repository

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{RepoError, RepoResult, UniqueField, ensure_unique, parse_id};
use crate::db::models::{User, UserRegister};
use crate::utils::time::now_millis;

const TABLE: &str = "user";
const ENTITY: &str = "User";

#[derive(Clone)]
pub struct UserRepository {
    db: Surreal<Db>,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let record_id = parse_id(TABLE, "user", id)?;
        let user: Option<User> = self.db.select((TABLE, record_id.key().to_string())).await?;
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .db
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Register a new user account. Guard order: username, then email.
    pub async fn create(&self, data: UserRegister) -> RepoResult<User> {
        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &[
                UniqueField::required("username", "username", &data.username),
                UniqueField::required("email", "email", &data.email),
            ],
            None,
        )
        .await?;

        let password = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;
        let now = now_millis();

        #[derive(Serialize)]
        struct UserRow {
            username: String,
            email: String,
            password: String,
            created_at: i64,
            updated_at: i64,
        }

        let row = UserRow {
            username: data.username,
            email: data.email,
            password,
            created_at: now,
            updated_at: now,
        };

        let created: Option<User> = self.db.create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
