//! Book model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::enums::Genre;

/// Book record as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub units_sold: i32,
    pub genre: String,
    pub author_id: i64,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBook {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub price: Decimal,
    #[validate(range(min = 0, message = "Units sold cannot be negative"))]
    pub units_sold: i32,
    #[validate(custom(function = "known_genre"))]
    pub genre: String,
    pub author_id: i64,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Title cannot be blank".into());
        return Err(err);
    }
    Ok(())
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("Price cannot be negative".into());
        return Err(err);
    }
    Ok(())
}

fn known_genre(value: &str) -> Result<(), ValidationError> {
    value.parse::<Genre>().map(|_| ()).map_err(|_| {
        let mut err = ValidationError::new("known_genre");
        err.message = Some("Invalid genre".into());
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn request() -> CreateBook {
        CreateBook {
            title: "The Fellowship of the Ring".to_string(),
            description: None,
            price: Decimal::from_str("12.99").unwrap(),
            units_sold: 100,
            genre: "Fantasy".to_string(),
            author_id: 1,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut req = request();
        req.title = "   ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut req = request();
        req.price = Decimal::from_str("-0.01").unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_units_sold_is_rejected() {
        let mut req = request();
        req.units_sold = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn unknown_genre_is_rejected() {
        let mut req = request();
        req.genre = "invalid type".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_price_and_units_are_allowed() {
        let mut req = request();
        req.price = Decimal::ZERO;
        req.units_sold = 0;
        assert!(req.validate().is_ok());
    }
}
