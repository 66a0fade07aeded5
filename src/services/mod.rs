//! Business logic services

pub mod authors;
pub mod books;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorService,
    pub books: books::BookService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let authors = authors::AuthorService::new(repository.clone());
        let books = books::BookService::new(repository, authors.clone());
        Self { authors, books }
    }
}
