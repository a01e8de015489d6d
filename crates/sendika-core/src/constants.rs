//! Application-wide constants
//!
//! Centralized location for magic strings and configuration values
//! that are used across multiple modules.

/// Default API base URL for the sendika backend
pub const API_BASE_URL: &str = "https://api.sendika.app";

/// File name (storage key) for the persisted read-notification id list
pub const READ_IDS_KEY: &str = "read-notification-ids";

/// File name (storage key) for the persisted unread count
pub const UNREAD_COUNT_KEY: &str = "unread-count";

/// Maximum number of read ids kept after a cleanup pass.
/// Older ids are evicted first (insertion order doubles as eviction order).
pub const READ_IDS_CAP: usize = 500;

/// Notifications requested per feed page
pub const DEFAULT_PAGE_SIZE: u32 = 50;
