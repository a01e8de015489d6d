pub mod notification;

pub use notification::{
    FeedPage, FeedPagination, NotificationKind, NotificationRecord, PaginationCursor,
};
