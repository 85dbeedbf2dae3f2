use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::{BookId, ReaderId};
use crate::utils::date::serializer;

// BookEntity abstracts a single registered copy of a book. Its availability is
// derived from the borrower so the two can never disagree.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: BookId,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
    pub borrower_id: Option<ReaderId>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(book_id: BookId, title: &str, author: &str) -> Self {
        Self {
            book_id,
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            published_year: None,
            borrower_id: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub(crate) fn lend_to(&mut self, reader_id: ReaderId) {
        self.borrower_id = Some(reader_id);
        self.touch();
    }

    pub(crate) fn take_back(&mut self) {
        self.borrower_id = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn borrower_id(&self) -> Option<ReaderId> {
        self.borrower_id
    }
}
