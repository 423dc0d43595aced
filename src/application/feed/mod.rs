mod html;
mod render;
mod view;

pub use html::test_ids;
pub use render::{FeedRequest, format_timestamp, render_feed, render_row};
pub use view::{
    DEFAULT_MAX_ITEMS, EMPTY_MESSAGE, FEED_TITLE, FeedRow, FeedView, PERFORMED_BY_PREFIX,
    SKELETON_ROWS,
};
