use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::{BookId, ReaderId};
use crate::readers::domain::{normalize_name, Reader};
use crate::utils::date::serializer;

// ReaderEntity abstracts a registered library reader and the books it holds,
// in the order they were borrowed.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ReaderEntity {
    pub reader_id: ReaderId,
    pub version: i64,
    pub name: String,
    pub borrowed_book_ids: Vec<BookId>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ReaderEntity {
    pub fn new(reader_id: ReaderId, name: &str) -> Self {
        Self {
            reader_id,
            version: 0,
            name: normalize_name(name),
            borrowed_book_ids: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub(crate) fn add_book(&mut self, book_id: BookId) {
        self.borrowed_book_ids.push(book_id);
        self.touch();
    }

    // Returns false when the book was not held.
    pub(crate) fn remove_book(&mut self, book_id: BookId) -> bool {
        match self.borrowed_book_ids.iter().position(|id| *id == book_id) {
            Some(pos) => {
                self.borrowed_book_ids.remove(pos);
                self.touch();
                true
            }
            None => false,
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        self.updated_at = Utc::now().naive_utc();
    }
}

impl Reader for ReaderEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn borrowed_book_ids(&self) -> &[BookId] {
        self.borrowed_book_ids.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use crate::readers::domain::Reader;
    use crate::readers::domain::model::ReaderEntity;

    #[tokio::test]
    async fn test_should_build_reader() {
        let reader = ReaderEntity::new(10, "alice");
        assert_eq!("Alice", reader.name());
        assert_eq!(0, reader.borrowed_count());
    }

    #[tokio::test]
    async fn test_should_keep_borrow_order() {
        let mut reader = ReaderEntity::new(10, "alice");
        reader.add_book(3);
        reader.add_book(1);
        reader.add_book(2);
        assert_eq!(&[3, 1, 2], reader.borrowed_book_ids());
        assert!(reader.remove_book(1));
        assert_eq!(&[3, 2], reader.borrowed_book_ids());
        assert!(!reader.remove_book(1));
        assert!(reader.holds(2));
        assert!(!reader.holds(1));
        assert_eq!(3, reader.version);
    }
}
