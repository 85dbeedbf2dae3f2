use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::domain::ReaderId;
use crate::readers::dto::ReaderDto;

pub struct AddReaderCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddReaderCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddReaderCommandRequest {
    pub(crate) reader_id: ReaderId,
    pub(crate) name: String,
}

impl AddReaderCommandRequest {
    pub fn new(reader_id: ReaderId, name: &str) -> Self {
        Self {
            reader_id,
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddReaderCommandResponse {
    pub reader: ReaderDto,
}

impl AddReaderCommandResponse {
    pub fn new(reader: ReaderDto) -> Self {
        Self {
            reader,
        }
    }
}

#[async_trait]
impl Command<AddReaderCommandRequest, AddReaderCommandResponse> for AddReaderCommand {
    async fn execute(&self, req: AddReaderCommandRequest) -> Result<AddReaderCommandResponse, CommandError> {
        let reader = ReaderDto::new(req.reader_id, req.name.as_str());
        self.catalog_service.register_reader(&reader).await.map_err(CommandError::from).map(AddReaderCommandResponse::new)
    }
}
