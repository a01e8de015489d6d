//! Persisted read-state overlay.
//!
//! Stores the ids the user has already consumed as a JSON array in insertion
//! order (oldest-marked-first), which doubles as the eviction order for
//! `cleanup`. This is a best-effort cache, not a system of record: any read
//! failure degrades to an empty set and any write failure is logged and
//! swallowed, leaving the previous durable state intact.
//!
//! Every operation performs a read-modify-write of the same file, so all of
//! them funnel through one internal mutex. Without that, a `mark_read` racing
//! a `mark_all_read` could load the same snapshot and one batch of ids would
//! silently vanish on the second save.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use crate::constants::{READ_IDS_CAP, READ_IDS_KEY};

pub struct ReadStateStore {
    path: PathBuf,
    /// Single-writer queue for all load-mutate-save cycles
    writer: Mutex<()>,
}

impl ReadStateStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(READ_IDS_KEY),
            writer: Mutex::new(()),
        }
    }

    /// Ids currently marked as read.
    ///
    /// Missing or corrupt data yields an empty set; the caller never sees a
    /// storage error.
    pub async fn load(&self) -> HashSet<String> {
        let _guard = self.writer.lock().await;
        self.read_list().await.into_iter().collect()
    }

    /// Mark one id as read. Idempotent: re-marking an already-read id leaves
    /// the persisted list unchanged.
    pub async fn mark_read(&self, id: &str) {
        let _guard = self.writer.lock().await;
        let mut ids = self.read_list().await;
        if ids.iter().any(|existing| existing == id) {
            return;
        }
        ids.push(id.to_string());
        self.persist(&ids).await;
    }

    /// Mark many ids as read with a single persisted write.
    pub async fn mark_all_read(&self, new_ids: &[String]) {
        let _guard = self.writer.lock().await;
        let mut ids = self.read_list().await;
        let mut seen: HashSet<String> = ids.iter().cloned().collect();
        let mut changed = false;
        for id in new_ids {
            if seen.insert(id.clone()) {
                ids.push(id.clone());
                changed = true;
            }
        }
        if changed {
            self.persist(&ids).await;
        }
    }

    /// Trim the persisted list to the `READ_IDS_CAP` most-recently-marked
    /// ids, evicting oldest-inserted entries first.
    pub async fn cleanup(&self) {
        let _guard = self.writer.lock().await;
        let ids = self.read_list().await;
        if ids.len() <= READ_IDS_CAP {
            return;
        }
        let trimmed = ids[ids.len() - READ_IDS_CAP..].to_vec();
        tracing::debug!(
            "read_state: evicting {} oldest ids ({} -> {})",
            ids.len() - trimmed.len(),
            ids.len(),
            trimmed.len()
        );
        self.persist(&trimmed).await;
    }

    /// Remove the persisted list entirely (logout).
    pub async fn clear(&self) {
        let _guard = self.writer.lock().await;
        if let Err(e) = tokio::fs::remove_file(&self.path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("read_state: failed to clear {}: {}", self.path.display(), e);
            }
        }
    }

    async fn read_list(&self) -> Vec<String> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("read_state: failed to read {}: {}", self.path.display(), e);
                }
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("read_state: corrupt id list, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Write-to-temp-then-rename so a crash mid-write never leaves a
    /// half-written list behind. Failures are logged and swallowed.
    async fn persist(&self, ids: &[String]) {
        let bytes = match serde_json::to_vec(ids) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("read_state: failed to serialize id list: {}", e);
                return;
            }
        };

        if let Err(e) = write_atomic(&self.path, &bytes).await {
            tracing::warn!("read_state: failed to persist {}: {}", self.path.display(), e);
        }
    }
}

/// Atomic replace shared by the persisted stores.
pub(crate) async fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let temp = path.with_extension("tmp");
    tokio::fs::write(&temp, bytes).await?;
    tokio::fs::rename(&temp, path).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_empty_when_nothing_stored() {
        let dir = tempdir().unwrap();
        let store = ReadStateStore::new(dir.path());
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_empty_on_corrupt_data() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(READ_IDS_KEY), b"not json at all").unwrap();
        let store = ReadStateStore::new(dir.path());
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_mark_read_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = ReadStateStore::new(dir.path());

        store.mark_read("n1").await;
        store.mark_read("n1").await;

        let raw = std::fs::read_to_string(dir.path().join(READ_IDS_KEY)).unwrap();
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids, vec!["n1".to_string()]);
    }

    #[tokio::test]
    async fn test_mark_all_read_batches_and_preserves_order() {
        let dir = tempdir().unwrap();
        let store = ReadStateStore::new(dir.path());

        store.mark_read("n1").await;
        store
            .mark_all_read(&["n2".into(), "n1".into(), "n3".into()])
            .await;

        let raw = std::fs::read_to_string(dir.path().join(READ_IDS_KEY)).unwrap();
        let ids: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(ids, vec!["n1".to_string(), "n2".into(), "n3".into()]);
    }

    #[tokio::test]
    async fn test_cleanup_keeps_most_recent_cap_ids() {
        let dir = tempdir().unwrap();
        let store = ReadStateStore::new(dir.path());

        // 501 ids inserted in known order
        let ids: Vec<String> = (0..=READ_IDS_CAP).map(|i| format!("n{}", i)).collect();
        store.mark_all_read(&ids).await;
        store.cleanup().await;

        let raw = std::fs::read_to_string(dir.path().join(READ_IDS_KEY)).unwrap();
        let kept: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(kept.len(), READ_IDS_CAP);
        // Oldest-inserted id evicted, the rest kept in order
        assert_eq!(kept.first().unwrap(), "n1");
        assert_eq!(kept.last().unwrap(), &format!("n{}", READ_IDS_CAP));
    }

    #[tokio::test]
    async fn test_cleanup_is_noop_under_cap() {
        let dir = tempdir().unwrap();
        let store = ReadStateStore::new(dir.path());

        store.mark_all_read(&["n1".into(), "n2".into()]).await;
        store.cleanup().await;

        assert_eq!(store.load().await.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let dir = tempdir().unwrap();
        let store = ReadStateStore::new(dir.path());

        store.mark_read("n1").await;
        store.clear().await;

        assert!(store.load().await.is_empty());
        assert!(!dir.path().join(READ_IDS_KEY).exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        let dir = tempdir().unwrap();
        // data_dir is a regular file, so every persist attempt fails
        let bogus = dir.path().join("not-a-dir");
        std::fs::write(&bogus, b"").unwrap();
        let store = ReadStateStore::new(&bogus);

        store.mark_read("n1").await;
        store.mark_all_read(&["n2".into(), "n3".into()]).await;
        store.cleanup().await;

        // No panic, and the durable state is still what it was before
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_mutations_lose_no_updates() {
        let dir = tempdir().unwrap();
        let store = Arc::new(ReadStateStore::new(dir.path()));

        let single = {
            let store = store.clone();
            tokio::spawn(async move { store.mark_read("solo").await })
        };
        let batch = {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .mark_all_read(&["b1".into(), "b2".into(), "b3".into()])
                    .await
            })
        };
        single.await.unwrap();
        batch.await.unwrap();

        let ids = store.load().await;
        assert_eq!(ids.len(), 4);
        assert!(ids.contains("solo"));
        assert!(ids.contains("b1") && ids.contains("b2") && ids.contains("b3"));
    }
}
