//! Book service

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook},
    repository::Repository,
};

use super::authors::AuthorService;

/// Name of the compound-key constraint backing duplicate detection
const TITLE_AUTHOR_UNIQUE: &str = "book_title_author_unique";

#[derive(Clone)]
pub struct BookService {
    repository: Repository,
    authors: AuthorService,
}

impl BookService {
    pub fn new(repository: Repository, authors: AuthorService) -> Self {
        Self {
            repository,
            authors,
        }
    }

    /// Look up a book by id
    pub async fn find_by_id(&self, id: i64) -> AppResult<Book> {
        tracing::debug!("Retrieving book with id {}", id);
        self.repository
            .books
            .find_by_id(id)
            .await?
            .ok_or(AppError::BookNotFound(id))
    }

    /// Persist a new book.
    ///
    /// The duplicate check runs before the author-existence check, so a
    /// duplicate title against a missing author still reports the conflict
    /// rather than the missing author.
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let existing = self
            .repository
            .books
            .find_by_title_and_author(&data.title, data.author_id)
            .await?;
        if existing.is_some() {
            return Err(AppError::BookAlreadyExists {
                title: data.title.clone(),
                author_id: data.author_id,
            });
        }

        self.authors.find_by_id(data.author_id).await?;

        match self.repository.books.insert(data).await {
            Ok(book) => Ok(book),
            // Two concurrent creates can both pass the lookup above; the
            // unique constraint is the arbiter.
            Err(AppError::Database(sqlx::Error::Database(db)))
                if db.constraint() == Some(TITLE_AUTHOR_UNIQUE) =>
            {
                Err(AppError::BookAlreadyExists {
                    title: data.title.clone(),
                    author_id: data.author_id,
                })
            }
            Err(e) => Err(e),
        }
    }

    /// One zero-based page of books plus the full unpaginated count
    pub async fn find_books(&self, page: i64, page_size: i64) -> AppResult<(Vec<Book>, i64)> {
        self.repository.books.list(page, page_size).await
    }

    /// Delete a book by id; absent ids report `BookNotFound`
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        tracing::debug!("Deleting book with id {}", id);
        let deleted = self.repository.books.delete_by_id(id).await?;
        if !deleted {
            return Err(AppError::BookNotFound(id));
        }
        tracing::debug!("Deleted book with id {}", id);
        Ok(())
    }
}
