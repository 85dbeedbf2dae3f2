use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::{CatalogService, SearchHit};
use crate::core::command::{Command, CommandError};

pub struct SearchCatalogCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchCatalogCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchCatalogCommandRequest {
    pub(crate) term: String,
}

impl SearchCatalogCommandRequest {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchCatalogCommandResponse {
    pub term: String,
    pub hits: Vec<SearchHit>,
}

impl SearchCatalogCommandResponse {
    pub fn new(term: String, hits: Vec<SearchHit>) -> Self {
        Self {
            term,
            hits,
        }
    }
}

#[async_trait]
impl Command<SearchCatalogCommandRequest, SearchCatalogCommandResponse> for SearchCatalogCommand {
    async fn execute(&self, req: SearchCatalogCommandRequest) -> Result<SearchCatalogCommandResponse, CommandError> {
        let hits = self.catalog_service.search(req.term.as_str()).await?;
        Ok(SearchCatalogCommandResponse::new(req.term, hits))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::catalog::command::search_catalog_cmd::{SearchCatalogCommand, SearchCatalogCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::SearchIndex;
    use crate::gateway::GatewayPublisherVia;
    use crate::readers::dto::ReaderDto;

    lazy_static! {
        static ref SUT_CMD: AsyncOnce<SearchCatalogCommand> = AsyncOnce::new(async {
                let svc: Arc<dyn CatalogService> = Arc::from(factory::create_catalog_service(
                    &Configuration::new("test"), GatewayPublisherVia::Memory).expect("should create service"));
                svc.register_book(&BookDto::new(1, "Linux Cookbook", "Carla Schroder")).await.expect("should add book");
                svc.register_book(&BookDto::new(2, "How Linux Works", "Brian Ward")).await.expect("should add book");
                svc.register_book(&BookDto::new(3, "Alice in Wonderland", "Lewis Carroll")).await.expect("should add book");
                svc.register_reader(&ReaderDto::new(10, "Alice")).await.expect("should add reader");
                SearchCatalogCommand::new(svc)
            });
    }

    #[tokio::test]
    async fn test_should_run_search() {
        let cmd = SUT_CMD.get().await;
        let res = cmd.execute(SearchCatalogCommandRequest::new("LINUX")).await.expect("should search");
        assert_eq!("LINUX", res.term.as_str());
        assert_eq!(2, res.hits.len());
        assert!(res.hits.iter().all(|hit| hit.index() == SearchIndex::Title));
    }

    #[tokio::test]
    async fn test_should_tag_hits_by_index() {
        let cmd = SUT_CMD.get().await;
        let res = cmd.execute(SearchCatalogCommandRequest::new("alice")).await.expect("should search");
        let indexes: Vec<SearchIndex> = res.hits.iter().map(|hit| hit.index()).collect();
        assert_eq!(vec![SearchIndex::Title, SearchIndex::Reader], indexes);

        let res = cmd.execute(SearchCatalogCommandRequest::new("car")).await.expect("should search");
        let indexes: Vec<SearchIndex> = res.hits.iter().map(|hit| hit.index()).collect();
        assert_eq!(vec![SearchIndex::Author, SearchIndex::Author], indexes);
    }

    #[tokio::test]
    async fn test_should_fail_blank_search() {
        let cmd = SUT_CMD.get().await;
        let res = cmd.execute(SearchCatalogCommandRequest::new("")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
