//! Persisted unread-count mirror.
//!
//! A single JSON-encoded non-negative integer, updated after every
//! reconciliation pass so other screens can show a badge without re-fetching
//! or re-filtering the feed. Pure write-through: never validated against the
//! live feed, and stale between a reconciliation trigger and its completion.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::constants::UNREAD_COUNT_KEY;
use crate::store::read_state::write_atomic;

pub struct UnreadCountCache {
    path: PathBuf,
    writer: Mutex<()>,
}

impl UnreadCountCache {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(UNREAD_COUNT_KEY),
            writer: Mutex::new(()),
        }
    }

    /// Overwrite the persisted count. Failures are logged and swallowed; the
    /// previous durable value survives.
    pub async fn set(&self, count: usize) {
        let _guard = self.writer.lock().await;
        let bytes = count.to_string().into_bytes();
        if let Err(e) = write_atomic(&self.path, &bytes).await {
            tracing::warn!(
                "unread_count: failed to persist {}: {}",
                self.path.display(),
                e
            );
        }
    }

    /// Last persisted count, or 0 if absent/corrupt.
    pub async fn get(&self) -> usize {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(_) => return 0,
        };
        match serde_json::from_slice::<u64>(&bytes) {
            Ok(count) => count as usize,
            Err(e) => {
                tracing::warn!("unread_count: corrupt value, treating as 0: {}", e);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_get_defaults_to_zero() {
        let dir = tempdir().unwrap();
        let cache = UnreadCountCache::new(dir.path());
        assert_eq!(cache.get().await, 0);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let cache = UnreadCountCache::new(dir.path());

        cache.set(7).await;
        assert_eq!(cache.get().await, 7);

        cache.set(0).await;
        assert_eq!(cache.get().await, 0);
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // data_dir is a regular file, so the write can never land
        let bogus = dir.path().join("not-a-dir");
        std::fs::write(&bogus, b"").unwrap();
        let cache = UnreadCountCache::new(&bogus);

        cache.set(7).await;

        // No panic; the durable value is unchanged (absent reads as 0)
        assert_eq!(cache.get().await, 0);
    }

    #[tokio::test]
    async fn test_corrupt_value_reads_as_zero() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(UNREAD_COUNT_KEY), b"-3garbage").unwrap();
        let cache = UnreadCountCache::new(dir.path());
        assert_eq!(cache.get().await, 0);
    }
}
