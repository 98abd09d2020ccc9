use anyhow::{bail, Result};

use crate::Commands;

use super::container::Container;
use super::controller::{CatalogController, TestController};

pub struct Router<'a> {
    catalog_controller: CatalogController<'a>,
    test_controller: TestController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            catalog_controller: CatalogController::new(container),
            test_controller: TestController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Companies { search } => {
                self.catalog_controller.companies(search.as_deref()).await
            }
            Commands::Company { company_id } => {
                self.catalog_controller.company(&company_id).await
            }
            Commands::Models => self.catalog_controller.models().await,
            Commands::Model { model_id } => self.catalog_controller.model(&model_id).await,
            Commands::Providers => Ok(self.catalog_controller.providers()),
            Commands::TestConnection { model_id, api_key } => {
                self.test_controller.test_connection(&model_id, &api_key).await
            }
            Commands::Manual {
                model_id,
                api_key,
                prompt,
            } => self.test_controller.manual(&model_id, &api_key, &prompt).await,
            Commands::Serve { .. } => {
                bail!("serve is handled by the HTTP server, not the router")
            }
        }
    }
}
