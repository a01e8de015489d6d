//! Global unread badge count.
//!
//! Lets any screen show the unread badge without mounting the notifications
//! screen: holds a live in-memory count, refreshed by fetching the first feed
//! page and reconciling it against the read overlay, write-through persisted
//! via the count cache. When the fetch fails the badge falls back to the last
//! cached count rather than dropping to zero.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::NotificationFeed;
use crate::store::{reconcile, ReadStateStore, UnreadCountCache};

pub struct NotificationBadge<F: NotificationFeed> {
    feed: F,
    read_state: Arc<ReadStateStore>,
    unread_cache: Arc<UnreadCountCache>,
    count: RwLock<usize>,
    page_size: u32,
}

impl<F: NotificationFeed> NotificationBadge<F> {
    pub fn new(
        feed: F,
        read_state: Arc<ReadStateStore>,
        unread_cache: Arc<UnreadCountCache>,
        page_size: u32,
    ) -> Self {
        Self {
            feed,
            read_state,
            unread_cache,
            count: RwLock::new(0),
            page_size,
        }
    }

    /// Load the cached count so the badge shows something before the first
    /// refresh completes.
    pub async fn init(&self) {
        let cached = self.unread_cache.get().await;
        *self.count.write() = cached;
    }

    /// Current badge value (synchronous, for render paths).
    pub fn current(&self) -> usize {
        *self.count.read()
    }

    /// Recompute the count from the first feed page and the read overlay.
    /// Falls back to the cached count on fetch failure.
    pub async fn refresh(&self) {
        match self.feed.fetch_notifications(1, self.page_size).await {
            Ok(page) => {
                let read_ids = self.read_state.load().await;
                let view = reconcile(&page.items, &read_ids);
                *self.count.write() = view.count;
                self.unread_cache.set(view.count).await;
            }
            Err(e) => {
                tracing::debug!("badge: refresh failed, using cached count: {}", e);
                let cached = self.unread_cache.get().await;
                *self.count.write() = cached;
            }
        }
    }

    /// Zero the badge (e.g. when the notifications screen consumed
    /// everything).
    pub async fn clear(&self) {
        *self.count.write() = 0;
        self.unread_cache.set(0).await;
    }
}
