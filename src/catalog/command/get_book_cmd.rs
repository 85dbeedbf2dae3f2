use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::readers::dto::ReaderDto;

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub(crate) title: String,
}

impl GetBookCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

// The book together with the reader currently holding it, if any.
#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
    pub borrower: Option<ReaderDto>,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto, borrower: Option<ReaderDto>) -> Self {
        Self {
            book,
            borrower,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        let (book, borrower) = self.catalog_service.find_book_with_borrower(req.title.as_str()).await?;
        Ok(GetBookCommandResponse::new(book, borrower))
    }
}
