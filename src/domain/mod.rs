//! # Domain Layer
//!
//! Catalog records, provider keys, test outcomes and the error taxonomy.
//! This layer is independent of HTTP clients and servers.

pub mod error;
pub mod models;

pub use error::*;
pub use models::*;
