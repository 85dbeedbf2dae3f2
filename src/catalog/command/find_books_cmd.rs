use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BookStatus;

// FindBooksCommand lists books by author, by availability, or both.
pub struct FindBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FindBooksCommandRequest {
    pub(crate) author: Option<String>,
    pub(crate) status: Option<BookStatus>,
}

impl FindBooksCommandRequest {
    pub fn new(author: Option<&str>, status: Option<BookStatus>) -> Self {
        Self {
            author: author.map(str::to_string),
            status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FindBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl FindBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<FindBooksCommandRequest, FindBooksCommandResponse> for FindBooksCommand {
    async fn execute(&self, req: FindBooksCommandRequest) -> Result<FindBooksCommandResponse, CommandError> {
        let books = match req.author {
            Some(author) => {
                let books = self.catalog_service.find_books_by_author(author.as_str()).await?;
                books.into_iter().filter(|b| req.status.map_or(true, |s| b.book_status == s)).collect()
            }
            None => self.catalog_service.list_books(req.status).await?,
        };
        Ok(FindBooksCommandResponse::new(books))
    }
}
