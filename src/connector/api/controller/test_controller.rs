use anyhow::{anyhow, Result};

use crate::domain::DomainError;

use super::super::Container;

pub struct TestController<'a> {
    container: &'a Container,
}

impl<'a> TestController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn test_connection(&self, model_id: &str, api_key: &str) -> Result<String> {
        let outcome = self
            .container
            .test_connection_use_case()
            .execute(model_id, api_key)
            .await
            .map_err(failure)?;

        Ok(format!("{} ({} ms)", outcome.message, outcome.time))
    }

    pub async fn manual(&self, model_id: &str, api_key: &str, prompt: &str) -> Result<String> {
        let outcome = self
            .container
            .manual_test_use_case()
            .execute(model_id, api_key, prompt)
            .await
            .map_err(failure)?;

        Ok(outcome.response)
    }
}

/// Surface the same status/message pair the HTTP API would return.
fn failure(err: DomainError) -> anyhow::Error {
    anyhow!("[{}] {}", err.status_code(), err.client_message())
}
