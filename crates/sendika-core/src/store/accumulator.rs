//! Session-scoped append buffer for fetched feed pages.

use crate::models::{FeedPage, NotificationRecord, PaginationCursor};

/// Cumulative list of notifications fetched across pages within one screen
/// session. Append-only between resets; rebuilt from the remote source each
/// session (never persisted). Performs no read-state comparison.
pub struct FeedAccumulator {
    items: Vec<NotificationRecord>,
    cursor: PaginationCursor,
}

impl FeedAccumulator {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: PaginationCursor::start(),
        }
    }

    /// Empty the accumulated list and rewind the cursor (full refresh).
    pub fn reset(&mut self) {
        self.items.clear();
        self.cursor = PaginationCursor::start();
    }

    /// Append one fetched page in the order received.
    ///
    /// Pages are trusted to be disjoint; duplicate ids from an ill-behaved
    /// backend propagate into the unread view.
    pub fn append_page(&mut self, page: FeedPage) {
        self.cursor = PaginationCursor {
            page: page.pagination.page,
            has_more: page.pagination.page < page.pagination.total_pages,
        };
        self.items.extend(page.items);
    }

    /// Full accumulated list in fetch order.
    pub fn all(&self) -> &[NotificationRecord] {
        &self.items
    }

    pub fn cursor(&self) -> PaginationCursor {
        self.cursor
    }

    pub fn has_more(&self) -> bool {
        self.cursor.has_more
    }

    /// Page number the next fetch should request.
    pub fn next_page(&self) -> u32 {
        self.cursor.page + 1
    }
}

impl Default for FeedAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
