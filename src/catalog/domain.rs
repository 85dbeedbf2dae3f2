pub mod index;
pub mod service;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::core::domain::{BookId, ReaderId};
use crate::core::library::{BookStatus, LibraryResult, SearchIndex};
use crate::readers::dto::ReaderDto;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn register_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn register_reader(&self, reader: &ReaderDto) -> LibraryResult<ReaderDto>;
    async fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto>;
    async fn find_reader_by_id(&self, id: ReaderId) -> LibraryResult<ReaderDto>;
    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto>;
    async fn find_book_with_borrower(&self, title: &str) -> LibraryResult<(BookDto, Option<ReaderDto>)>;
    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_reader_by_name(&self, name: &str) -> LibraryResult<ReaderDto>;
    async fn find_reader_with_books(&self, name: &str) -> LibraryResult<(ReaderDto, Vec<BookDto>)>;
    async fn borrow(&self, title: &str, reader_name: &str) -> LibraryResult<BookDto>;
    async fn return_book(&self, title: &str, reader_name: &str) -> LibraryResult<BookDto>;
    async fn search(&self, term: &str) -> LibraryResult<Vec<SearchHit>>;
    async fn status_summary(&self) -> LibraryResult<CatalogSummary>;
    async fn list_reader_books(&self, reader_name: &str) -> LibraryResult<Vec<BookDto>>;
    async fn list_books(&self, status: Option<BookStatus>) -> LibraryResult<Vec<BookDto>>;
    async fn borrow_history(&self) -> LibraryResult<Vec<ReaderDto>>;
}

// SearchHit is a single search match tagged by the index that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "index", content = "record")]
pub enum SearchHit {
    Title(BookDto),
    Author(BookDto),
    Reader(ReaderDto),
}

impl SearchHit {
    pub fn index(&self) -> SearchIndex {
        match self {
            SearchHit::Title(_) => SearchIndex::Title,
            SearchHit::Author(_) => SearchIndex::Author,
            SearchHit::Reader(_) => SearchIndex::Reader,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub total_books: usize,
    pub available_books: usize,
    pub borrowed_books: usize,
    pub total_readers: usize,
    pub readers_with_history: usize,
}
