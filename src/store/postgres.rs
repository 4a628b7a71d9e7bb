use async_trait::async_trait;
use uuid::Uuid;

use super::{CatalogStore, StoreError};
use crate::infrastructure::db::pool::DbPool;
use crate::modules::book::model::BookSummary;
use crate::modules::genre::model::Genre;

pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn list_genres(&self) -> Result<Vec<Genre>, StoreError> {
        let genres = sqlx::query_as::<_, Genre>(
            "SELECT id, name, created_at FROM genres ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(genres)
    }

    async fn find_genre(&self, id: Uuid) -> Result<Option<Genre>, StoreError> {
        let genre =
            sqlx::query_as::<_, Genre>("SELECT id, name, created_at FROM genres WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(genre)
    }

    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, StoreError> {
        // lower() follows the database collation, not ASCII folding.
        let genre = sqlx::query_as::<_, Genre>(
            "SELECT id, name, created_at FROM genres WHERE lower(name) = lower($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(genre)
    }

    async fn insert_genre(&self, name: &str) -> Result<Genre, StoreError> {
        let genre = sqlx::query_as::<_, Genre>(
            "INSERT INTO genres (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(genre)
    }

    async fn books_in_genre(&self, genre: Uuid) -> Result<Vec<BookSummary>, StoreError> {
        let books = sqlx::query_as::<_, BookSummary>(
            "SELECT id, title, summary FROM books WHERE genre = $1",
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }
}
