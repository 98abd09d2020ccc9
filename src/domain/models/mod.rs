mod catalog_view;
mod company;
mod model;
mod outcome;
mod provider;

pub use catalog_view::*;
pub use company::*;
pub use model::*;
pub use outcome::*;
pub use provider::*;
