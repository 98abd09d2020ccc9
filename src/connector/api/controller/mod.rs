pub mod catalog_controller;
pub mod test_controller;

pub use catalog_controller::CatalogController;
pub use test_controller::TestController;
