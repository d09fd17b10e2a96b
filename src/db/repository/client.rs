//! Client Repository

use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{RepoError, RepoResult, UniqueField, count_records, ensure_unique, parse_id};
use crate::db::models::{Client, ClientInput};
use crate::db::sequence::{CLIENT, CodeSequences};
use crate::utils::time::now_millis;

const TABLE: &str = "client";
const ENTITY: &str = "Client";

#[derive(Clone)]
pub struct ClientRepository {
    db: Surreal<Db>,
    sequences: CodeSequences,
}

impl ClientRepository {
    pub fn new(db: Surreal<Db>, sequences: CodeSequences) -> Self {
        Self { db, sequences }
    }

    /// Paginated listing, newest first.
    pub async fn find_page(&self, page: u64, limit: u64) -> RepoResult<Vec<Client>> {
        let start = (page.saturating_sub(1)) * limit;
        let clients: Vec<Client> = self
            .db
            .query("SELECT * FROM client ORDER BY created_at DESC LIMIT $limit START $start")
            .bind(("limit", limit))
            .bind(("start", start))
            .await?
            .take(0)?;
        Ok(clients)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Client>> {
        let record_id = parse_id(TABLE, "client", id)?;
        let client: Option<Client> = self
            .db
            .select((TABLE, record_id.key().to_string()))
            .await?;
        Ok(client)
    }

    pub async fn count(&self) -> RepoResult<u64> {
        count_records(&self.db, TABLE).await
    }

    /// Guard fields in tie-break order: phone first, then email.
    fn unique_fields(data: &ClientInput) -> [UniqueField<'_>; 2] {
        [
            UniqueField::required("phone", "phone number", &data.phone),
            UniqueField::optional("email", "email", &data.email),
        ]
    }

    pub async fn create(&self, data: ClientInput, actor: RecordId) -> RepoResult<Client> {
        let _guard = self.sequences.lock(CLIENT.table).await;

        ensure_unique(&self.db, ENTITY, TABLE, &Self::unique_fields(&data), None).await?;

        let client_code = self.sequences.next_code(&CLIENT).await?;
        let now = now_millis();

        #[derive(Serialize)]
        struct ClientRow {
            client_code: String,
            first_name: String,
            phone: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            last_name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            other_names: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            age: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            profession: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            country_id: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            address: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            website: Option<String>,
            client_status: i32,
            #[serde(skip_serializing_if = "Option::is_none")]
            organization: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            client_photo: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            created_by: RecordId,
            created_at: i64,
            updated_at: i64,
        }

        let row = ClientRow {
            client_code,
            first_name: data.first_name,
            phone: data.phone,
            last_name: data.last_name,
            other_names: data.other_names,
            age: data.age,
            email: data.email,
            profession: data.profession,
            country_id: data.country_id,
            address: data.address,
            website: data.website,
            client_status: data.client_status.unwrap_or(1),
            organization: data.organization,
            client_photo: data.client_photo,
            description: data.description,
            created_by: actor,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Client> = self.db.create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create client".to_string()))
    }

    pub async fn update(&self, id: &str, data: ClientInput, actor: RecordId) -> RepoResult<Client> {
        let record_id = parse_id(TABLE, "client", id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Client {id} not found")))?;

        ensure_unique(
            &self.db,
            ENTITY,
            TABLE,
            &Self::unique_fields(&data),
            Some(&record_id),
        )
        .await?;

        #[derive(Serialize)]
        struct ClientChanges {
            first_name: String,
            phone: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            last_name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            other_names: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            age: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            profession: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            country_id: Option<i64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            address: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            website: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            client_status: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            organization: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            client_photo: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            updated_by: RecordId,
            updated_at: i64,
        }

        let changes = ClientChanges {
            first_name: data.first_name,
            phone: data.phone,
            last_name: data.last_name,
            other_names: data.other_names,
            age: data.age,
            email: data.email,
            profession: data.profession,
            country_id: data.country_id,
            address: data.address,
            website: data.website,
            client_status: data.client_status,
            organization: data.organization,
            client_photo: data.client_photo,
            description: data.description,
            updated_by: actor,
            updated_at: now_millis(),
        };

        self.db
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", record_id.clone()))
            .bind(("data", changes))
            .await?
            .check()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Client {id} not found")))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Client> {
        let record_id = parse_id(TABLE, "client", id)?;
        let deleted: Option<Client> = self
            .db
            .delete((TABLE, record_id.key().to_string()))
            .await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Client {id} not found")))
    }
}
