pub mod error;
pub mod feed;
pub mod maintenance;

pub use error::ApplicationResult;
