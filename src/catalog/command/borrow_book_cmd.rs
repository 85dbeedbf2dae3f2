use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct BorrowBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl BorrowBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    title: String,
    reader_name: String,
}

impl BorrowBookCommandRequest {
    pub fn new(title: &str, reader_name: &str) -> Self {
        Self {
            title: title.to_string(),
            reader_name: reader_name.to_string(),
        }
    }
}


#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub book: BookDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.catalog_service.borrow(req.title.as_str(), req.reader_name.as_str())
            .await.map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}
