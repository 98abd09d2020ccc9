//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Provider connectors (OpenAI, Google, Anthropic, DeepSeek) and their registry
//! - The JSON catalog
//! - The HTTP surface and the CLI composition root

pub mod adapter;
pub mod api;

pub use adapter::*;
