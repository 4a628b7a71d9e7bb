use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::book::model::BookSummary;
use crate::modules::genre::model::Genre;

pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database failure")]
    Database(#[from] sqlx::Error),
}

/// Persistence boundary over the genre and book collections. Held in
/// `AppState` as a trait object so tests can swap in the memory store.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All genres, ordered ascending by name.
    async fn list_genres(&self) -> Result<Vec<Genre>, StoreError>;

    async fn find_genre(&self, id: Uuid) -> Result<Option<Genre>, StoreError>;

    /// Case-insensitive lookup under the store's native collation.
    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, StoreError>;

    /// Inserts a genre and returns it with its generated id.
    async fn insert_genre(&self, name: &str) -> Result<Genre, StoreError>;

    /// Books referencing the genre, projected to their summary fields.
    async fn books_in_genre(&self, genre: Uuid) -> Result<Vec<BookSummary>, StoreError>;
}
