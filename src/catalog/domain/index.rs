use std::collections::BTreeMap;
use crate::core::domain::{BookId, ReaderId};

// CatalogIndex holds the secondary lookups of a catalog. Keys are ordered so
// scans and search results come back in a stable order.
#[derive(Debug, Default)]
pub(crate) struct CatalogIndex {
    by_title: BTreeMap<String, BookId>,
    by_author: BTreeMap<String, Vec<BookId>>,
    by_reader_name: BTreeMap<String, ReaderId>,
}

impl CatalogIndex {
    pub(crate) fn has_title(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    pub(crate) fn has_reader_name(&self, name: &str) -> bool {
        self.by_reader_name.contains_key(name)
    }

    pub(crate) fn add_book(&mut self, book_id: BookId, title: &str, author: &str) {
        self.by_title.insert(title.to_string(), book_id);
        self.by_author.entry(author.to_string()).or_default().push(book_id);
    }

    pub(crate) fn add_reader(&mut self, reader_id: ReaderId, name: &str) {
        self.by_reader_name.insert(name.to_string(), reader_id);
    }

    pub(crate) fn book_by_title(&self, title: &str) -> Option<BookId> {
        self.by_title.get(title).copied()
    }

    pub(crate) fn books_by_author(&self, author: &str) -> Option<&[BookId]> {
        self.by_author.get(author).map(Vec::as_slice)
    }

    pub(crate) fn reader_by_name(&self, name: &str) -> Option<ReaderId> {
        self.by_reader_name.get(name).copied()
    }

    // needle must already be lower-cased
    pub(crate) fn titles_containing(&self, needle: &str) -> Vec<BookId> {
        self.by_title.iter()
            .filter(|(title, _)| title.to_lowercase().contains(needle))
            .map(|(_, id)| *id)
            .collect()
    }

    // needle must already be lower-cased
    pub(crate) fn authors_containing(&self, needle: &str) -> Vec<BookId> {
        self.by_author.iter()
            .filter(|(author, _)| author.to_lowercase().contains(needle))
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }
}
