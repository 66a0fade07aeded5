//! Data models for the book service

pub mod author;
pub mod book;
pub mod enums;
pub mod pagination;

// Re-export commonly used types
pub use author::{Author, AuthorSummary, AuthorWithBooks, CreateAuthor};
pub use book::{Book, CreateBook};
pub use enums::Genre;
pub use pagination::{PageQuery, PaginatedResponse};
