use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::{BookId, Identifiable, ReaderId};
use crate::utils::date::serializer;

// ReaderDto is a data transfer object for library readers
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReaderDto {
    pub reader_id: ReaderId,
    pub version: i64,
    pub name: String,
    pub borrowed_book_ids: Vec<BookId>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ReaderDto {
    pub fn new(reader_id: ReaderId, name: &str) -> Self {
        Self {
            reader_id,
            version: 0,
            name: name.to_string(),
            borrowed_book_ids: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for ReaderDto {
    fn id(&self) -> u64 {
        self.reader_id
    }

    fn version(&self) -> i64 {
        self.version
    }
}
