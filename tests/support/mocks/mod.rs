// tests/support/mocks/mod.rs
pub mod rest_server;
pub mod site_store;
pub mod time;

pub use rest_server::*;
pub use site_store::*;
pub use time::*;
