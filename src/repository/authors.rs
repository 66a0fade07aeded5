//! Author persistence

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, Book, CreateAuthor},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get author by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, first_name, last_name FROM author WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    /// All books currently referencing the given author
    pub async fn books(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, description, price, units_sold, genre, author_id
            FROM book
            WHERE author_id = $1
            ORDER BY id
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// Insert a new author, returning the record with its assigned id
    pub async fn insert(&self, data: &CreateAuthor) -> AppResult<Author> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO author (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(author)
    }

    /// One zero-based page of authors plus the full unpaginated count
    pub async fn list(&self, page: i64, page_size: i64) -> AppResult<(Vec<Author>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM author")
            .fetch_one(&self.pool)
            .await?;

        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, first_name, last_name
            FROM author
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(page * page_size)
        .fetch_all(&self.pool)
        .await?;

        Ok((authors, total))
    }

    /// Delete the author only when no book references it; returns whether
    /// a row was removed. The guard runs inside the statement so a book
    /// inserted between a prior check and this call cannot be orphaned.
    pub async fn delete_if_unreferenced(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM author a
            WHERE a.id = $1
              AND NOT EXISTS (SELECT 1 FROM book b WHERE b.author_id = a.id)
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
