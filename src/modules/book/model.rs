use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Book record as the genre pages see it. The `genre` field is a
/// back-reference used for lookup only; deleting a genre never touches
/// the books that point at it.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub genre: Uuid,
}

/// Projection used by the genre detail page.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BookSummary {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
}
