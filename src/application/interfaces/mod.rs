mod catalog_repository;
mod connector_resolver;
mod provider_connector;

pub use catalog_repository::*;
pub use connector_resolver::*;
pub use provider_connector::*;
