use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::readers::dto::ReaderDto;

pub struct GetReaderCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetReaderCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetReaderCommandRequest {
    pub(crate) name: String,
}

impl GetReaderCommandRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

// The reader together with the books it currently holds, in borrow order.
#[derive(Debug, Serialize)]
pub struct GetReaderCommandResponse {
    pub reader: ReaderDto,
    pub books: Vec<BookDto>,
}

impl GetReaderCommandResponse {
    pub fn new(reader: ReaderDto, books: Vec<BookDto>) -> Self {
        Self {
            reader,
            books,
        }
    }
}

#[async_trait]
impl Command<GetReaderCommandRequest, GetReaderCommandResponse> for GetReaderCommand {
    async fn execute(&self, req: GetReaderCommandRequest) -> Result<GetReaderCommandResponse, CommandError> {
        let (reader, books) = self.catalog_service.find_reader_with_books(req.name.as_str()).await?;
        Ok(GetReaderCommandResponse::new(reader, books))
    }
}
