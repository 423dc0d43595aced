pub mod entity;
pub mod kind;

pub use entity::{Activity, ActivityId};
pub use kind::{ActivityKind, FALLBACK_LABEL};
