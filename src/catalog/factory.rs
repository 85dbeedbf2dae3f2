use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;

pub fn create_catalog_service(config: &Configuration, via: GatewayPublisherVia) -> LibraryResult<Box<dyn CatalogService>> {
    let publisher = create_publisher(via);
    Ok(Box::new(CatalogServiceImpl::new(config, publisher)?))
}
