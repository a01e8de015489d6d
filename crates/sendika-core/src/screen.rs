//! Notifications screen controller (no rendering).
//!
//! Owns the session-scoped feed accumulator and drives it page by page
//! through the injected collaborator, filtering through the persisted read
//! overlay after every change. The rendering layer only consumes `phase()`
//! and `unread()`.

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::NotificationFeed;
use crate::error::FeedError;
use crate::models::NotificationRecord;
use crate::store::{reconcile, FeedAccumulator, ReadStateStore, UnreadCountCache, UnreadView};

/// Loading phase of the notifications screen.
///
/// `Ready` is the only phase whose reconciliation output is valid for
/// display; intermediate phases keep the previously published view so the
/// list never flashes empty while loading more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    LoadingFirstPage,
    Ready,
    LoadingMore,
    Refreshing,
    Error,
}

pub struct NotificationsScreen<F: NotificationFeed> {
    feed: F,
    read_state: Arc<ReadStateStore>,
    unread_cache: Arc<UnreadCountCache>,
    accumulator: FeedAccumulator,
    /// Session copy of the overlay; reloaded from the store on mount/refresh
    read_ids: HashSet<String>,
    view: UnreadView,
    phase: FeedPhase,
    last_error: Option<FeedError>,
    page_size: u32,
}

impl<F: NotificationFeed> NotificationsScreen<F> {
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
            accumulator: FeedAccumulator::new(),
            read_ids: HashSet::new(),
            view: UnreadView::default(),
            phase: FeedPhase::Idle,
            last_error: None,
            page_size,
        }
    }

    // ===== Getters =====

    pub fn phase(&self) -> FeedPhase {
        self.phase
    }

    pub fn unread(&self) -> &[NotificationRecord] {
        &self.view.unread
    }

    pub fn unread_count(&self) -> usize {
        self.view.count
    }

    pub fn has_more(&self) -> bool {
        self.accumulator.has_more()
    }

    pub fn last_error(&self) -> Option<&FeedError> {
        self.last_error.as_ref()
    }

    // ===== Loading =====

    /// Initial load on screen mount. A successful mount also runs a
    /// read-state cleanup pass so the overlay stays bounded at its natural
    /// growth point; a failed fetch mutates nothing.
    pub async fn load_first_page(&mut self) {
        self.phase = FeedPhase::LoadingFirstPage;
        self.last_error = None;

        self.read_ids = self.read_state.load().await;

        match self.feed.fetch_notifications(1, self.page_size).await {
            Ok(page) => {
                self.accumulator.reset();
                self.accumulator.append_page(page);
                self.republish().await;
                self.read_state.cleanup().await;
                self.phase = FeedPhase::Ready;
            }
            Err(e) => {
                tracing::warn!("notifications: first page fetch failed: {}", e);
                self.last_error = Some(e);
                self.phase = FeedPhase::Error;
            }
        }
    }

    /// Fetch the next page and append it. A failure here keeps the screen
    /// `Ready` with the current view intact; only first-page and refresh
    /// failures surface as `Error`.
    pub async fn load_more(&mut self) {
        if self.phase != FeedPhase::Ready || !self.accumulator.has_more() {
            return;
        }
        self.phase = FeedPhase::LoadingMore;

        match self
            .feed
            .fetch_notifications(self.accumulator.next_page(), self.page_size)
            .await
        {
            Ok(page) => {
                self.accumulator.append_page(page);
                self.republish().await;
            }
            Err(e) => {
                tracing::warn!("notifications: load more failed: {}", e);
            }
        }
        self.phase = FeedPhase::Ready;
    }

    /// Pull-to-refresh: reload the overlay and restart from page 1. The
    /// accumulator is only replaced once the new first page has arrived
    /// whole, so a failed refresh leaves everything as it was.
    pub async fn refresh(&mut self) {
        self.phase = FeedPhase::Refreshing;
        self.last_error = None;
        self.read_ids = self.read_state.load().await;

        match self.feed.fetch_notifications(1, self.page_size).await {
            Ok(page) => {
                self.accumulator.reset();
                self.accumulator.append_page(page);
                self.republish().await;
                self.phase = FeedPhase::Ready;
            }
            Err(e) => {
                tracing::warn!("notifications: refresh failed: {}", e);
                self.last_error = Some(e);
                self.phase = FeedPhase::Error;
            }
        }
    }

    /// Retry after a surfaced error.
    pub async fn retry(&mut self) {
        if self.phase == FeedPhase::Error {
            self.load_first_page().await;
        }
    }

    // ===== Read-state mutations =====

    /// Mark one notification as read (user tapped it). Observed order for
    /// any later cache read: persist read id, reconcile, update count cache.
    pub async fn mark_read(&mut self, id: &str) {
        self.read_state.mark_read(id).await;
        self.read_ids.insert(id.to_string());
        self.republish().await;
    }

    /// Mark every currently unread notification as read in one batch.
    pub async fn mark_all_read(&mut self) {
        let ids: Vec<String> = self.view.unread.iter().map(|n| n.id.clone()).collect();
        if ids.is_empty() {
            return;
        }
        self.read_state.mark_all_read(&ids).await;
        self.read_ids.extend(ids);
        self.republish().await;
        self.read_state.cleanup().await;
    }

    /// Recompute the unread view from the two inputs and mirror its size
    /// into the persisted count cache.
    async fn republish(&mut self) {
        self.view = reconcile(self.accumulator.all(), &self.read_ids);
        self.unread_cache.set(self.view.count).await;
    }
}
