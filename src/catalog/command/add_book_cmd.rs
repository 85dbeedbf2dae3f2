use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::BookId;

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub(crate) book_id: BookId,
    pub(crate) title: String,
    pub(crate) author: String,
    #[serde(default)]
    pub(crate) published_year: Option<i32>,
}

impl AddBookCommandRequest {
    pub fn new(book_id: BookId, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            published_year: None,
        }
    }
    pub fn build_book(&self) -> BookDto {
        let book = BookDto::new(self.book_id, self.title.as_str(), self.author.as_str());
        match self.published_year {
            Some(year) => book.with_year(year),
            None => book,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.register_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
