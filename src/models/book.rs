//! Book model and request payloads

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Book record (DB + API). The JSON representation uses camelCase keys;
/// column names stay snake_case.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Identity equality: (id, isbn) pair
impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.isbn == other.isbn
    }
}

impl Eq for Book {}

/// Client payload for create/update requests. Carries every mutable field;
/// id and timestamps are assigned server-side.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "ISBN is required"))]
    pub isbn: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    pub published_year: Option<i32>,
    #[serde(default)]
    pub quantity: i32,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        let mut error = ValidationError::new("positive");
        error.message = Some("Price must be positive".into());
        return Err(error);
    }
    Ok(())
}

/// Insert shape: payload fields plus service-assigned timestamps,
/// no id (storage issues it).
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub published_year: Option<i32>,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewBook {
    /// Build an insert row from a validated payload, stamping both timestamps
    pub fn from_payload(payload: BookPayload, now: DateTime<Utc>) -> Self {
        Self {
            title: payload.title,
            author: payload.author,
            isbn: payload.isbn,
            price: payload.price,
            description: payload.description,
            published_year: payload.published_year,
            quantity: payload.quantity,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> BookPayload {
        BookPayload {
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            isbn: "978-0132350884".to_string(),
            price: Decimal::new(3499, 2),
            description: Some("A Handbook of Agile Software Craftsmanship".to_string()),
            published_year: Some(2008),
            quantity: 50,
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut payload = valid_payload();
        payload.title = String::new();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn blank_author_and_isbn_are_rejected() {
        let mut payload = valid_payload();
        payload.author = String::new();
        payload.isbn = String::new();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("isbn"));
    }

    #[test]
    fn zero_and_negative_price_are_rejected() {
        let mut payload = valid_payload();
        payload.price = Decimal::ZERO;
        assert!(payload.validate().is_err());
        payload.price = Decimal::new(-100, 2);
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn oversized_description_is_rejected() {
        let mut payload = valid_payload();
        payload.description = Some("x".repeat(1001));
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn book_equality_is_id_and_isbn() {
        let now = Utc::now();
        let book = Book {
            id: 1,
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            isbn: "978-0132350884".to_string(),
            price: Decimal::new(3499, 2),
            description: None,
            published_year: Some(2008),
            quantity: 50,
            created_at: now,
            updated_at: now,
        };
        let mut other = book.clone();
        other.title = "Renamed".to_string();
        other.quantity = 0;
        assert_eq!(book, other);

        other.isbn = "978-0000000000".to_string();
        assert_ne!(book, other);
    }
}
