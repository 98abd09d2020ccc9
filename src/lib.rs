pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    BrowseCatalogUseCase, CatalogRepository, ConnectorResolver, ManualTestUseCase,
    ProviderConnector, TestConnectionUseCase,
};

pub use cli::Commands;

pub use connector::{
    AnthropicConnector, ConnectorRegistry, DeepSeekConnector, GoogleConnector, JsonCatalog,
    OpenAiConnector, ProviderSettings,
};

pub use domain::{
    CodeSnippets, Company, ConnectionOutcome, ConnectorError, DomainError, ManualTestOutcome,
    Model, ModelCategory, ProviderKey, ProviderReply,
};
