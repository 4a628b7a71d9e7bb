use tracing::debug;
use uuid::Uuid;

use super::dto::{self, NameRejection};
use super::model::Genre;
use crate::common::error::AppError;
use crate::modules::book::model::BookSummary;
use crate::store::CatalogStore;

/// Decision logic for the genre resource. Everything here talks to the
/// injected store; handlers translate outcomes into responses.
pub struct GenreService;

/// What a create submission resolved to.
pub enum CreateOutcome {
    /// Candidate passed screening and was inserted.
    Created(Genre),
    /// A case-insensitive duplicate already exists; nothing was written.
    Existing(Genre),
    /// Screening failed; the form should be redisplayed.
    Rejected(NameRejection),
}

impl GenreService {
    pub async fn list(store: &dyn CatalogStore) -> Result<Vec<Genre>, AppError> {
        Ok(store.list_genres().await?)
    }

    /// The genre plus the books referencing it. Both reads are issued
    /// up front and jointly awaited; either fault fails the operation.
    pub async fn detail(
        store: &dyn CatalogStore,
        id: Uuid,
    ) -> Result<(Genre, Vec<BookSummary>), AppError> {
        let (genre, books) = tokio::try_join!(store.find_genre(id), store.books_in_genre(id))?;

        let genre = genre.ok_or_else(|| AppError::not_found("Genre not found"))?;
        Ok((genre, books))
    }

    /// Screens the submitted name, then inserts unless an equivalent
    /// genre already exists. The existence check and the insert are two
    /// store calls; racing submissions of the same name can both pass
    /// the check, so the uniqueness invariant ultimately needs a unique
    /// index on lower(name).
    pub async fn create(
        store: &dyn CatalogStore,
        raw_name: &str,
    ) -> Result<CreateOutcome, AppError> {
        let name = match dto::screen_name(raw_name) {
            Ok(name) => name,
            Err(rejection) => return Ok(CreateOutcome::Rejected(rejection)),
        };

        if let Some(existing) = store.find_genre_by_name(&name).await? {
            debug!(genre = %existing.id, "duplicate name, reusing existing genre");
            return Ok(CreateOutcome::Existing(existing));
        }

        let genre = store.insert_genre(&name).await?;
        Ok(CreateOutcome::Created(genre))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::book::model::Book;
    use crate::store::memory::MemoryCatalogStore;

    #[tokio::test]
    async fn created_genre_is_found_by_detail() {
        let store = MemoryCatalogStore::new();

        let outcome = GenreService::create(&store, "  Sci-Fi  ").await.unwrap();
        let created = match outcome {
            CreateOutcome::Created(genre) => genre,
            _ => panic!("expected a fresh insert"),
        };
        assert_eq!(created.name, "Sci-Fi");

        let (genre, books) = GenreService::detail(&store, created.id).await.unwrap();
        assert_eq!(genre.name, "Sci-Fi");
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn case_variant_submission_reuses_the_first_record() {
        let store = MemoryCatalogStore::new();

        let first = match GenreService::create(&store, "Sci-Fi").await.unwrap() {
            CreateOutcome::Created(genre) => genre,
            _ => panic!("expected a fresh insert"),
        };

        let second = GenreService::create(&store, "sci-fi").await.unwrap();
        match second {
            CreateOutcome::Existing(genre) => assert_eq!(genre.id, first.id),
            _ => panic!("expected the existing record"),
        }
        assert_eq!(store.list_genres().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rejected_name_writes_nothing() {
        let store = MemoryCatalogStore::new();

        let outcome = GenreService::create(&store, " ab ").await.unwrap();
        match outcome {
            CreateOutcome::Rejected(rejection) => {
                assert_eq!(rejection.candidate, "ab");
                assert!(!rejection.errors.is_empty());
            }
            _ => panic!("expected a rejection"),
        }
        assert!(store.list_genres().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn detail_of_unknown_id_is_not_found() {
        let store = MemoryCatalogStore::new();

        let result = GenreService::detail(&store, Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn detail_returns_every_referencing_book() {
        let store = MemoryCatalogStore::new();
        let genre = store.insert_genre("Fantasy").await.unwrap();
        let stray = store.insert_genre("Poetry").await.unwrap();

        for title in ["The Tombs of Atuan", "The Farthest Shore"] {
            store
                .add_book(Book {
                    id: Uuid::new_v4(),
                    title: title.to_string(),
                    summary: format!("{title} summary"),
                    genre: genre.id,
                })
                .await;
        }

        let (_, books) = GenreService::detail(&store, genre.id).await.unwrap();
        assert_eq!(books.len(), 2);

        let (_, books) = GenreService::detail(&store, stray.id).await.unwrap();
        assert!(books.is_empty());
    }
}
