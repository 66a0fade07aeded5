//! Author service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorSummary, AuthorWithBooks, Book, CreateAuthor},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthorService {
    repository: Repository,
}

impl AuthorService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Look up an author and its current books
    pub async fn find_by_id(&self, id: i64) -> AppResult<AuthorWithBooks> {
        tracing::debug!("Retrieving author with id {}", id);
        let author = self
            .repository
            .authors
            .find_by_id(id)
            .await?
            .ok_or(AppError::AuthorNotFound(id))?;
        let books = self.repository.authors.books(id).await?;
        Ok(AuthorWithBooks::new(author, books))
    }

    /// Persist a new author; input fields are validated at the boundary
    pub async fn create(&self, data: &CreateAuthor) -> AppResult<Author> {
        tracing::debug!("Saving author {} {}", data.first_name, data.last_name);
        self.repository.authors.insert(data).await
    }

    /// One zero-based page of authors, each enriched with its books and the
    /// derived total worth of those books. The returned count is the full
    /// unpaginated dataset size.
    pub async fn find_authors(
        &self,
        page: i64,
        page_size: i64,
    ) -> AppResult<(Vec<AuthorSummary>, i64)> {
        let (authors, total) = self.repository.authors.list(page, page_size).await?;

        let mut summaries = Vec::with_capacity(authors.len());
        for author in authors {
            let books = self.repository.authors.books(author.id).await?;
            summaries.push(AuthorSummary {
                id: author.id,
                first_name: author.first_name,
                last_name: author.last_name,
                total_book_worth: total_book_worth(&books),
                books,
            });
        }

        Ok((summaries, total))
    }

    /// Delete an author, but only when no book references it
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let author = self.find_by_id(id).await?;
        if !author.books.is_empty() {
            return Err(AppError::AuthorHasBooks(id));
        }
        // The emptiness check above is advisory; the statement re-checks so a
        // book created in between cannot be orphaned.
        let deleted = self.repository.authors.delete_if_unreferenced(id).await?;
        if !deleted {
            return Err(AppError::AuthorHasBooks(id));
        }
        tracing::debug!("Deleted author with id {}", id);
        Ok(())
    }
}

/// Sum of `price * units_sold` over the given books, in exact decimal
/// arithmetic; an empty collection is worth zero.
pub fn total_book_worth(books: &[Book]) -> Decimal {
    books
        .iter()
        .map(|book| book.price * Decimal::from(book.units_sold))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn book(price: &str, units_sold: i32) -> Book {
        Book {
            id: 0,
            title: "t".to_string(),
            description: None,
            price: Decimal::from_str(price).unwrap(),
            units_sold,
            genre: "Fantasy".to_string(),
            author_id: 1,
        }
    }

    #[test]
    fn worth_of_no_books_is_zero() {
        assert_eq!(total_book_worth(&[]), Decimal::ZERO);
    }

    #[test]
    fn worth_sums_price_times_units() {
        // 2.22 * 10 + 1.9 * 15 = 22.20 + 28.50
        let books = [book("2.22", 10), book("1.9", 15)];
        assert_eq!(
            total_book_worth(&books),
            Decimal::from_str("50.70").unwrap()
        );
    }

    #[test]
    fn worth_handles_integral_prices() {
        // 9 * 9 + 9.9 * 20 = 81 + 198
        let books = [book("9", 9), book("9.9", 20)];
        assert_eq!(total_book_worth(&books), Decimal::from_str("279.0").unwrap());
    }
}
