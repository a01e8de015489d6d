//! Logout reset for the persisted notification state.

use std::sync::Arc;

use crate::store::{ReadStateStore, UnreadCountCache};

/// Clears the read-state overlay and the unread-count mirror as one logical
/// unit on logout, so no read-state leaks across accounts sharing a device.
/// Feed accumulators are session-scoped and rebuilt on the next mount.
pub struct SessionReset {
    read_state: Arc<ReadStateStore>,
    unread_cache: Arc<UnreadCountCache>,
}

impl SessionReset {
    pub fn new(read_state: Arc<ReadStateStore>, unread_cache: Arc<UnreadCountCache>) -> Self {
        Self {
            read_state,
            unread_cache,
        }
    }

    /// The next authenticated session starts with every fetched notification
    /// unread.
    pub async fn on_logout(&self) {
        self.read_state.clear().await;
        self.unread_cache.set(0).await;
        tracing::debug!("session: notification state cleared on logout");
    }
}
