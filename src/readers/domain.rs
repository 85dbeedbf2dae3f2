use crate::core::domain::BookId;

pub mod model;

pub trait Reader: Sync + Send {
    fn name(&self) -> &str;
    fn borrowed_book_ids(&self) -> &[BookId];

    fn holds(&self, book_id: BookId) -> bool {
        self.borrowed_book_ids().contains(&book_id)
    }

    fn borrowed_count(&self) -> usize {
        self.borrowed_book_ids().len()
    }
}

/// Canonical form of a reader name: surrounding whitespace removed, first
/// character upper-cased and the rest lower-cased. Registration and every
/// lookup by name go through it.
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::readers::domain::normalize_name;

    #[tokio::test]
    async fn test_should_normalize_names() {
        assert_eq!("Alice", normalize_name("alice"));
        assert_eq!("Alice", normalize_name("  ALICE "));
        assert_eq!("Ева", normalize_name("еВА"));
        assert_eq!("Mary ann", normalize_name("mary Ann"));
        assert_eq!("", normalize_name("   "));
    }
}
