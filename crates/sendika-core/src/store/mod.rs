pub mod accumulator;
pub mod read_state;
pub mod reconcile;
pub mod unread_count;

pub use accumulator::FeedAccumulator;
pub use read_state::ReadStateStore;
pub use reconcile::{reconcile, UnreadView};
pub use unread_count::UnreadCountCache;
