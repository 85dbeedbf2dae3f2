use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::catalog::domain::{CatalogService, CatalogSummary};
use crate::core::command::{Command, CommandError};
use crate::readers::dto::ReaderDto;

pub struct CatalogStatusCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl CatalogStatusCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct CatalogStatusCommandRequest {}

#[derive(Debug, Serialize)]
pub struct CatalogStatusCommandResponse {
    pub summary: CatalogSummary,
    pub borrow_history: Vec<ReaderDto>,
}

impl CatalogStatusCommandResponse {
    pub fn new(summary: CatalogSummary, borrow_history: Vec<ReaderDto>) -> Self {
        Self {
            summary,
            borrow_history,
        }
    }
}

#[async_trait]
impl Command<CatalogStatusCommandRequest, CatalogStatusCommandResponse> for CatalogStatusCommand {
    async fn execute(&self, _req: CatalogStatusCommandRequest) -> Result<CatalogStatusCommandResponse, CommandError> {
        let summary = self.catalog_service.status_summary().await?;
        let history = self.catalog_service.borrow_history().await?;
        Ok(CatalogStatusCommandResponse::new(summary, history))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::command::catalog_status_cmd::{CatalogStatusCommand, CatalogStatusCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::readers::dto::ReaderDto;

    #[tokio::test]
    async fn test_should_run_catalog_status() {
        let svc: Arc<dyn CatalogService> = Arc::from(factory::create_catalog_service(
            &Configuration::new("test"), GatewayPublisherVia::Memory).expect("should create service"));
        let cmd = CatalogStatusCommand::new(svc.clone());
        let res = cmd.execute(CatalogStatusCommandRequest::default()).await.expect("should report status");
        assert_eq!(0, res.summary.total_books);
        assert!(res.borrow_history.is_empty());

        svc.register_book(&BookDto::new(1, "Clean Code", "Robert Martin")).await.expect("should add book");
        svc.register_book(&BookDto::new(2, "FastAPI", "Bill Lubanovic")).await.expect("should add book");
        svc.register_reader(&ReaderDto::new(10, "Alice")).await.expect("should add reader");
        svc.borrow("FastAPI", "Alice").await.expect("should borrow");
        svc.return_book("FastAPI", "Alice").await.expect("should return");

        let res = cmd.execute(CatalogStatusCommandRequest::default()).await.expect("should report status");
        assert_eq!(2, res.summary.total_books);
        assert_eq!(2, res.summary.available_books);
        assert_eq!(0, res.summary.borrowed_books);
        assert_eq!(vec![10], res.borrow_history.iter().map(|r| r.reader_id).collect::<Vec<_>>());
    }
}
