use std::collections::{BTreeSet, HashMap};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::{CatalogService, CatalogSummary, SearchHit};
use crate::catalog::domain::index::CatalogIndex;
use crate::core::domain::{BookId, Configuration, Identifiable, ReaderId};
use crate::core::events::DomainEvent;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::readers::domain::{normalize_name, Reader};
use crate::readers::domain::model::ReaderEntity;
use crate::readers::dto::ReaderDto;

#[derive(Debug, Default)]
struct CatalogState {
    books: HashMap<BookId, BookEntity>,
    readers: HashMap<ReaderId, ReaderEntity>,
    index: CatalogIndex,
    borrow_history: BTreeSet<ReaderId>,
}

impl CatalogState {
    fn book(&self, id: BookId) -> LibraryResult<&BookEntity> {
        self.books.get(&id).ok_or_else(|| LibraryError::not_found(
            format!("book with id {} not found", id).as_str()))
    }

    fn reader(&self, id: ReaderId) -> LibraryResult<&ReaderEntity> {
        self.readers.get(&id).ok_or_else(|| LibraryError::not_found(
            format!("reader with id {} not found", id).as_str()))
    }

    fn book_id_by_title(&self, title: &str) -> LibraryResult<BookId> {
        self.index.book_by_title(title.trim()).ok_or_else(|| LibraryError::not_found(
            format!("book titled {:?} not found in title index", title).as_str()))
    }

    fn reader_id_by_name(&self, name: &str) -> LibraryResult<ReaderId> {
        self.index.reader_by_name(normalize_name(name).as_str()).ok_or_else(|| LibraryError::not_found(
            format!("reader named {:?} not found in name index", name).as_str()))
    }

    fn books_dto(&self, ids: &[BookId]) -> LibraryResult<Vec<BookDto>> {
        ids.iter().map(|id| self.book(*id).map(BookDto::from)).collect()
    }

    fn check_out(&mut self, book_id: BookId, reader_id: ReaderId, rental_limit: usize) -> LibraryResult<BookDto> {
        let book = self.books.get_mut(&book_id).ok_or_else(|| LibraryError::runtime(
            format!("indexed book {} is missing", book_id).as_str(), None))?;
        let reader = self.readers.get_mut(&reader_id).ok_or_else(|| LibraryError::runtime(
            format!("indexed reader {} is missing", reader_id).as_str(), None))?;
        if let Some(holder) = book.borrower_id() {
            return Err(LibraryError::unavailable(
                format!("book {:?} is already borrowed by reader {}", book.title, holder).as_str()));
        }
        if reader.borrowed_count() >= rental_limit {
            return Err(LibraryError::rental_limit_exceeded(
                format!("reader {:?} already holds {} books", reader.name, reader.borrowed_count()).as_str(),
                rental_limit));
        }
        book.lend_to(reader_id);
        reader.add_book(book_id);
        self.borrow_history.insert(reader_id);
        Ok(BookDto::from(&*book))
    }

    fn check_in(&mut self, book_id: BookId, reader_id: ReaderId) -> LibraryResult<BookDto> {
        let book = self.books.get_mut(&book_id).ok_or_else(|| LibraryError::runtime(
            format!("indexed book {} is missing", book_id).as_str(), None))?;
        let reader = self.readers.get_mut(&reader_id).ok_or_else(|| LibraryError::runtime(
            format!("indexed reader {} is missing", reader_id).as_str(), None))?;
        if book.borrower_id() != Some(reader_id) {
            return Err(LibraryError::not_borrowed(
                format!("book {:?} is not borrowed by reader {:?}", book.title, reader.name).as_str()));
        }
        if !reader.holds(book_id) {
            return Err(LibraryError::runtime(
                format!("reader {} does not list borrowed book {}", reader_id, book_id).as_str(), None));
        }
        reader.remove_book(book_id);
        book.take_back();
        Ok(BookDto::from(&*book))
    }
}

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    rental_limit: usize,
    state: Mutex<CatalogState>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> LibraryResult<Self> {
        config.validate()?;
        Ok(Self {
            branch_id: config.branch_id.to_string(),
            rental_limit: config.rental_limit,
            state: Mutex::new(CatalogState::default()),
            events_publisher,
        })
    }

    // Mutations are already committed when events go out, so a failed publish
    // is logged instead of being reported to the caller.
    async fn publish(&self, event: serde_json::Result<DomainEvent>) {
        match event {
            Ok(event) => {
                if let Err(err) = self.events_publisher.publish(&event).await {
                    warn!(event_id = %event.event_id, error = %err, "failed to publish {}", event.name);
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to build domain event");
            }
        }
    }

    fn metadata<T: Identifiable>(&self, record: &T) -> HashMap<String, String> {
        HashMap::from([
            ("branch_id".to_string(), self.branch_id.to_string()),
            ("version".to_string(), record.version().to_string()),
        ])
    }
}

fn validate_book(book: &BookDto) -> LibraryResult<()> {
    if book.title.trim().is_empty() {
        return Err(LibraryError::invalid_argument(
            format!("book {} has a blank title", book.book_id).as_str(), Some("title".to_string())));
    }
    if book.author.trim().is_empty() {
        return Err(LibraryError::invalid_argument(
            format!("book {} has a blank author", book.book_id).as_str(), Some("author".to_string())));
    }
    if book.book_status != BookStatus::Available || book.borrower_id.is_some() {
        return Err(LibraryError::invalid_argument(
            format!("book {} must be registered as available, not {}", book.book_id, book.book_status).as_str(), Some("book_status".to_string())));
    }
    Ok(())
}

fn validate_reader(reader: &ReaderDto) -> LibraryResult<()> {
    if normalize_name(reader.name.as_str()).is_empty() {
        return Err(LibraryError::invalid_argument(
            format!("reader {} has a blank name", reader.reader_id).as_str(), Some("name".to_string())));
    }
    if !reader.borrowed_book_ids.is_empty() {
        return Err(LibraryError::invalid_argument(
            format!("reader {} cannot be registered holding books", reader.reader_id).as_str(),
            Some("borrowed_book_ids".to_string())));
    }
    Ok(())
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn register_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate_book(book)?;
        let entity = BookEntity::from(book);
        let registered = {
            let mut state = self.state.lock().await;
            if state.books.contains_key(&entity.book_id) {
                debug!(book_id = entity.book_id, "rejected duplicate book id");
                return Err(LibraryError::duplicate_id(
                    format!("book with id {} is already registered", entity.book_id).as_str()));
            }
            if state.index.has_title(entity.title.as_str()) {
                debug!(book_id = entity.book_id, title = %entity.title, "rejected duplicate title");
                return Err(LibraryError::duplicate_id(
                    format!("book titled {:?} is already registered", entity.title).as_str()));
            }
            state.index.add_book(entity.book_id, entity.title.as_str(), entity.author.as_str());
            let registered = BookDto::from(&entity);
            state.books.insert(entity.book_id, entity);
            registered
        };
        info!(book_id = registered.book_id, title = %registered.title, "registered book");
        self.publish(DomainEvent::registered(
            "book_registered", "books", registered.id().to_string().as_str(), &self.metadata(&registered), &registered)).await;
        Ok(registered)
    }

    async fn register_reader(&self, reader: &ReaderDto) -> LibraryResult<ReaderDto> {
        validate_reader(reader)?;
        let entity = ReaderEntity::new(reader.reader_id, reader.name.as_str());
        let registered = {
            let mut state = self.state.lock().await;
            if state.readers.contains_key(&entity.reader_id) {
                debug!(reader_id = entity.reader_id, "rejected duplicate reader id");
                return Err(LibraryError::duplicate_id(
                    format!("reader with id {} is already registered", entity.reader_id).as_str()));
            }
            if state.index.has_reader_name(entity.name.as_str()) {
                debug!(reader_id = entity.reader_id, name = %entity.name, "rejected duplicate reader name");
                return Err(LibraryError::duplicate_id(
                    format!("reader named {:?} is already registered", entity.name).as_str()));
            }
            state.index.add_reader(entity.reader_id, entity.name.as_str());
            let registered = ReaderDto::from(&entity);
            state.readers.insert(entity.reader_id, entity);
            registered
        };
        info!(reader_id = registered.reader_id, name = %registered.name, "registered reader");
        self.publish(DomainEvent::registered(
            "reader_registered", "readers", registered.id().to_string().as_str(), &self.metadata(&registered), &registered)).await;
        Ok(registered)
    }

    async fn find_book_by_id(&self, id: BookId) -> LibraryResult<BookDto> {
        let state = self.state.lock().await;
        state.book(id).map(BookDto::from)
    }

    async fn find_reader_by_id(&self, id: ReaderId) -> LibraryResult<ReaderDto> {
        let state = self.state.lock().await;
        state.reader(id).map(ReaderDto::from)
    }

    async fn find_book_by_title(&self, title: &str) -> LibraryResult<BookDto> {
        let state = self.state.lock().await;
        let id = state.book_id_by_title(title)?;
        state.book(id).map(BookDto::from)
    }

    async fn find_book_with_borrower(&self, title: &str) -> LibraryResult<(BookDto, Option<ReaderDto>)> {
        let state = self.state.lock().await;
        let book = state.book(state.book_id_by_title(title)?)?;
        let borrower = match book.borrower_id() {
            Some(reader_id) => Some(ReaderDto::from(state.reader(reader_id)?)),
            None => None,
        };
        Ok((BookDto::from(book), borrower))
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        let state = self.state.lock().await;
        let ids = state.index.books_by_author(author.trim()).ok_or_else(|| LibraryError::not_found(
            format!("author {:?} not found in author index", author).as_str()))?;
        state.books_dto(ids)
    }

    async fn find_reader_by_name(&self, name: &str) -> LibraryResult<ReaderDto> {
        let state = self.state.lock().await;
        let id = state.reader_id_by_name(name)?;
        state.reader(id).map(ReaderDto::from)
    }

    async fn find_reader_with_books(&self, name: &str) -> LibraryResult<(ReaderDto, Vec<BookDto>)> {
        let state = self.state.lock().await;
        let reader = state.reader(state.reader_id_by_name(name)?)?;
        let books = state.books_dto(reader.borrowed_book_ids())?;
        Ok((ReaderDto::from(reader), books))
    }

    async fn borrow(&self, title: &str, reader_name: &str) -> LibraryResult<BookDto> {
        let (book, reader_id) = {
            let mut state = self.state.lock().await;
            let book_id = state.book_id_by_title(title)?;
            let reader_id = state.reader_id_by_name(reader_name)?;
            let book = state.check_out(book_id, reader_id, self.rental_limit).map_err(|err| {
                debug!(book_id, reader_id, error = %err, "rejected borrow");
                err
            })?;
            (book, reader_id)
        };
        info!(book_id = book.book_id, reader_id, "book borrowed");
        self.publish(DomainEvent::borrowed(
            "book_borrowed", "loans", book.id().to_string().as_str(), &self.metadata(&book), &book)).await;
        Ok(book)
    }

    async fn return_book(&self, title: &str, reader_name: &str) -> LibraryResult<BookDto> {
        let (book, reader_id) = {
            let mut state = self.state.lock().await;
            let book_id = state.book_id_by_title(title)?;
            let reader_id = state.reader_id_by_name(reader_name)?;
            let book = state.check_in(book_id, reader_id).map_err(|err| {
                debug!(book_id, reader_id, error = %err, "rejected return");
                err
            })?;
            (book, reader_id)
        };
        info!(book_id = book.book_id, reader_id, "book returned");
        self.publish(DomainEvent::returned(
            "book_returned", "loans", book.id().to_string().as_str(), &self.metadata(&book), &book)).await;
        Ok(book)
    }

    async fn search(&self, term: &str) -> LibraryResult<Vec<SearchHit>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Err(LibraryError::invalid_argument("search term must not be blank", Some("term".to_string())));
        }
        let state = self.state.lock().await;
        let mut hits = vec![];
        for id in state.index.titles_containing(needle.as_str()) {
            hits.push(SearchHit::Title(BookDto::from(state.book(id)?)));
        }
        for id in state.index.authors_containing(needle.as_str()) {
            hits.push(SearchHit::Author(BookDto::from(state.book(id)?)));
        }
        if let Some(id) = state.index.reader_by_name(normalize_name(term).as_str()) {
            hits.push(SearchHit::Reader(ReaderDto::from(state.reader(id)?)));
        }
        debug!(term, hits = hits.len(), "searched catalog");
        Ok(hits)
    }

    async fn status_summary(&self) -> LibraryResult<CatalogSummary> {
        let state = self.state.lock().await;
        let borrowed_books = state.books.values().filter(|b| !b.is_available()).count();
        Ok(CatalogSummary {
            total_books: state.books.len(),
            available_books: state.books.len() - borrowed_books,
            borrowed_books,
            total_readers: state.readers.len(),
            readers_with_history: state.borrow_history.len(),
        })
    }

    async fn list_reader_books(&self, reader_name: &str) -> LibraryResult<Vec<BookDto>> {
        let state = self.state.lock().await;
        let id = state.reader_id_by_name(reader_name)?;
        let reader = state.reader(id)?;
        state.books_dto(reader.borrowed_book_ids())
    }

    async fn list_books(&self, status: Option<BookStatus>) -> LibraryResult<Vec<BookDto>> {
        let state = self.state.lock().await;
        let mut books: Vec<BookDto> = state.books.values()
            .filter(|b| status.map_or(true, |s| b.status() == s))
            .map(BookDto::from)
            .collect();
        books.sort_by_key(|b| b.book_id);
        Ok(books)
    }

    async fn borrow_history(&self) -> LibraryResult<Vec<ReaderDto>> {
        let state = self.state.lock().await;
        state.borrow_history.iter().map(|id| state.reader(*id).map(ReaderDto::from)).collect()
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
            book_status: other.status(),
            borrower_id: other.borrower_id,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        let mut book = BookEntity::new(other.book_id, other.title.trim(), other.author.trim());
        book.published_year = other.published_year;
        book
    }
}

impl From<&ReaderEntity> for ReaderDto {
    fn from(other: &ReaderEntity) -> Self {
        Self {
            reader_id: other.reader_id,
            version: other.version,
            name: other.name.to_string(),
            borrowed_book_ids: other.borrowed_book_ids.clone(),
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
