//! Author model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::book::Book;

/// Author record as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Author together with the books currently referencing it
///
/// The books collection is resolved from the store on every read,
/// never cached on the author record.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorWithBooks {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub books: Vec<Book>,
}

impl AuthorWithBooks {
    pub fn new(author: Author, books: Vec<Book>) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name,
            last_name: author.last_name,
            books,
        }
    }
}

/// Read model returned by the paginated author listing: the author, its
/// books and the derived total worth of those books
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub books: Vec<Book>,
    pub total_book_worth: Decimal,
}

/// Create author request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthor {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Name cannot be blank".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_rejected() {
        let req = CreateAuthor {
            first_name: "".to_string(),
            last_name: "Tolkien".to_string(),
        };
        assert!(req.validate().is_err());

        let req = CreateAuthor {
            first_name: "John".to_string(),
            last_name: "  ".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn non_blank_names_pass() {
        let req = CreateAuthor {
            first_name: "John".to_string(),
            last_name: "Tolkien".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
