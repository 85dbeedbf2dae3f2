use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::{BookId, Identifiable, ReaderId};
use crate::core::library::BookStatus;
use crate::utils::date::serializer;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: BookId,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
    pub book_status: BookStatus,
    pub borrower_id: Option<ReaderId>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookDto {
    pub fn new(book_id: BookId, title: &str, author: &str) -> BookDto {
        BookDto {
            book_id,
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            published_year: None,
            book_status: BookStatus::Available,
            borrower_id: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn with_year(mut self, year: i32) -> BookDto {
        self.published_year = Some(year);
        self
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> u64 {
        self.book_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}
