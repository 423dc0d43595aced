pub mod entity;
pub mod filter;
pub mod repository;

pub use entity::{SiteId, SiteRow};
pub use filter::{SiteFilter, SiteMarker, SiteOrder, SiteQuery};
pub use repository::SiteStore;
