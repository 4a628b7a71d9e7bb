use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Genre {
    pub id: Uuid,
    /// Trimmed and entity-escaped before it ever reaches the store.
    pub name: String,
    #[serde(with = "time::serde::iso8601")]
    pub created_at: OffsetDateTime,
}

impl Genre {
    /// Canonical path, used for detail links and post-create redirects.
    pub fn url(&self) -> String {
        format!("/genre/{}", self.id)
    }
}
