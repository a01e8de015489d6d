//! Client-side notification engine for the sendika mobile app.
//!
//! The remote feed only knows what was sent, never what was seen, so the
//! unread view is derived locally: notifications accumulated page by page
//! from the API are filtered through a persisted read-state overlay, and a
//! small persisted counter mirrors the result for badge display elsewhere.
//! Everything here is reconciliation/state logic; rendering and navigation
//! live in the app layer.

pub mod api;
pub mod badge;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod screen;
pub mod session;
pub mod store;

pub use api::{HttpNotificationFeed, NotificationFeed};
pub use badge::NotificationBadge;
pub use config::CoreConfig;
pub use error::FeedError;
pub use models::{
    FeedPage, FeedPagination, NotificationKind, NotificationRecord, PaginationCursor,
};
pub use screen::{FeedPhase, NotificationsScreen};
pub use session::SessionReset;
pub use store::{reconcile, FeedAccumulator, ReadStateStore, UnreadCountCache, UnreadView};
