pub mod http;
pub mod providers;

mod connector_registry;
mod json_catalog;

pub use connector_registry::*;
pub use json_catalog::*;
pub use providers::*;
