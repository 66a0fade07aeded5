//! Book persistence

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Book, CreateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, description, price, units_sold, genre, author_id
            FROM book
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Compound-key lookup used for duplicate detection
    pub async fn find_by_title_and_author(
        &self,
        title: &str,
        author_id: i64,
    ) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, description, price, units_sold, genre, author_id
            FROM book
            WHERE title = $1 AND author_id = $2
            "#,
        )
        .bind(title)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Insert a new book, returning the record with its assigned id
    pub async fn insert(&self, data: &CreateBook) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO book (title, description, price, units_sold, genre, author_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, price, units_sold, genre, author_id
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.units_sold)
        .bind(&data.genre)
        .bind(data.author_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// One zero-based page of books plus the full unpaginated count
    pub async fn list(&self, page: i64, page_size: i64) -> AppResult<(Vec<Book>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book")
            .fetch_one(&self.pool)
            .await?;

        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, description, price, units_sold, genre, author_id
            FROM book
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page_size)
        .bind(page * page_size)
        .fetch_all(&self.pool)
        .await?;

        Ok((books, total))
    }

    /// Delete by id; returns whether a row was removed
    pub async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM book WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
