mod browse_catalog;
mod dispatch;
mod manual_test;
mod test_connection;

pub use browse_catalog::*;
pub use manual_test::*;
pub use test_connection::*;
