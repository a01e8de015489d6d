use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a pushed notification, deciding where a tap navigates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Announcement,
    News,
}

/// One notification as delivered by the backend history endpoint.
///
/// Immutable once fetched; identity is `id` and uniqueness is guaranteed by
/// the backend, not re-validated here. Field names on the wire follow the
/// backend payload (`type`, `contentId`, `createdAt`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// Id of the news/announcement this notification links to, if any
    #[serde(rename = "contentId", default)]
    pub related_content_id: Option<String>,
    #[serde(rename = "contentName", default)]
    pub related_content_name: Option<String>,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Pagination block returned alongside every feed page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeedPagination {
    pub page: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// One fetched page of the remote feed.
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub items: Vec<NotificationRecord>,
    pub pagination: FeedPagination,
}

/// How far the accumulator has been filled.
#[derive(Debug, Clone, Copy)]
pub struct PaginationCursor {
    /// Last page appended (0 before any page arrived)
    pub page: u32,
    pub has_more: bool,
}

impl PaginationCursor {
    pub fn start() -> Self {
        Self {
            page: 0,
            has_more: true,
        }
    }
}
