use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CatalogStore, StoreError};
use crate::modules::book::model::{Book, BookSummary};
use crate::modules::genre::model::Genre;

/// In-memory store for tests and local development.
#[derive(Default)]
pub struct MemoryCatalogStore {
    genres: RwLock<Vec<Genre>>,
    books: RwLock<Vec<Book>>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            genres: RwLock::new(Vec::new()),
            books: RwLock::new(books),
        }
    }

    /// Seeds a book record. The controller never writes books; this
    /// exists so fixtures can reference genres created through the trait.
    pub async fn add_book(&self, book: Book) {
        self.books.write().await.push(book);
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_genres(&self) -> Result<Vec<Genre>, StoreError> {
        let mut genres = self.genres.read().await.clone();
        genres.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(genres)
    }

    async fn find_genre(&self, id: Uuid) -> Result<Option<Genre>, StoreError> {
        Ok(self.genres.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn find_genre_by_name(&self, name: &str) -> Result<Option<Genre>, StoreError> {
        let needle = name.to_lowercase();
        Ok(self
            .genres
            .read()
            .await
            .iter()
            .find(|g| g.name.to_lowercase() == needle)
            .cloned())
    }

    async fn insert_genre(&self, name: &str) -> Result<Genre, StoreError> {
        let genre = Genre {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.genres.write().await.push(genre.clone());
        Ok(genre)
    }

    async fn books_in_genre(&self, genre: Uuid) -> Result<Vec<BookSummary>, StoreError> {
        Ok(self
            .books
            .read()
            .await
            .iter()
            .filter(|b| b.genre == genre)
            .map(|b| BookSummary {
                id: b.id,
                title: b.title.clone(),
                summary: b.summary.clone(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn genres_come_back_sorted_by_name() {
        let store = MemoryCatalogStore::new();
        store.insert_genre("Western").await.unwrap();
        store.insert_genre("Fantasy").await.unwrap();
        store.insert_genre("Poetry").await.unwrap();

        let names: Vec<String> = store
            .list_genres()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Fantasy", "Poetry", "Western"]);
    }

    #[tokio::test]
    async fn name_lookup_ignores_case_beyond_ascii() {
        let store = MemoryCatalogStore::new();
        let created = store.insert_genre("Littérature Érotique").await.unwrap();

        let found = store
            .find_genre_by_name("littérature érotique")
            .await
            .unwrap()
            .expect("case variant should match");
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn books_are_filtered_by_genre_reference() {
        let fantasy = Uuid::new_v4();
        let other = Uuid::new_v4();
        let store = MemoryCatalogStore::with_books(vec![
            Book {
                id: Uuid::new_v4(),
                title: "A Wizard of Earthsea".into(),
                summary: "An archipelago apprenticeship.".into(),
                genre: fantasy,
            },
            Book {
                id: Uuid::new_v4(),
                title: "The Big Sleep".into(),
                summary: "A private eye in Los Angeles.".into(),
                genre: other,
            },
        ]);

        let books = store.books_in_genre(fantasy).await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "A Wizard of Earthsea");
    }
}
