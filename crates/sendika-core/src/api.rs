//! Remote notification feed collaborator.
//!
//! The feed itself is externally owned; this module only defines the seam the
//! engine consumes plus the HTTP implementation against the backend's
//! notification history endpoint. Screens and tests inject their own
//! `NotificationFeed` implementations.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::FeedError;
use crate::models::{FeedPage, FeedPagination, NotificationRecord};

#[async_trait]
pub trait NotificationFeed: Send + Sync {
    /// Fetch one page of the feed. No partial-success shape: a page either
    /// arrives whole or the call fails.
    async fn fetch_notifications(&self, page: u32, limit: u32) -> Result<FeedPage, FeedError>;
}

/// Wire shape of `GET /api/notifications`.
#[derive(Deserialize)]
struct NotificationsResponse {
    notifications: Vec<NotificationRecord>,
    pagination: FeedPagination,
}

/// reqwest-backed feed against the sendika backend.
pub struct HttpNotificationFeed {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpNotificationFeed {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            bearer_token: None,
        }
    }

    /// Attach the session token sent as `Authorization: Bearer <token>`.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[async_trait]
impl NotificationFeed for HttpNotificationFeed {
    async fn fetch_notifications(&self, page: u32, limit: u32) -> Result<FeedPage, FeedError> {
        let url = format!("{}/api/notifications", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .query(&[("page", page), ("limit", limit)]);
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FeedError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::server(status.as_u16(), message));
        }

        let body: NotificationsResponse = response
            .json()
            .await
            .map_err(|e| FeedError::network(format!("malformed feed response: {}", e)))?;

        Ok(FeedPage {
            items: body.notifications,
            pagination: body.pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape_deserializes() {
        let json = r#"{
            "notifications": [{
                "id": "n1",
                "title": "Duyuru",
                "body": "Genel kurul tarihi açıklandı",
                "type": "announcement",
                "createdAt": "2024-05-01T09:30:00Z"
            }],
            "pagination": { "page": 1, "totalPages": 4 }
        }"#;

        let parsed: NotificationsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.notifications.len(), 1);
        assert_eq!(parsed.pagination.page, 1);
        assert_eq!(parsed.pagination.total_pages, 4);
    }
}
