//! Pure derivation of the unread view.

use std::collections::HashSet;

use crate::models::NotificationRecord;

/// Output of one reconciliation pass: the unread view and its size. Fully
/// replaces the previously published view.
#[derive(Debug, Clone, Default)]
pub struct UnreadView {
    pub unread: Vec<NotificationRecord>,
    pub count: usize,
}

/// Filter the accumulated feed through the read-state overlay.
///
/// Pure function of its two inputs: surviving items keep their relative order
/// from `all_items` (fetch/creation order, never re-sorted) and `count` is
/// always the length of `unread`. Called after every mutation of either
/// input — page appended, id marked read, cleanup, logout.
pub fn reconcile(all_items: &[NotificationRecord], read_ids: &HashSet<String>) -> UnreadView {
    let unread: Vec<NotificationRecord> = all_items
        .iter()
        .filter(|n| !read_ids.contains(&n.id))
        .cloned()
        .collect();
    let count = unread.len();
    UnreadView { unread, count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NotificationKind;
    use chrono::Utc;

    fn record(id: &str) -> NotificationRecord {
        NotificationRecord {
            id: id.to_string(),
            title: String::new(),
            body: String::new(),
            kind: NotificationKind::News,
            related_content_id: None,
            related_content_name: None,
            image_url: None,
            created_at: Utc::now(),
        }
    }

    fn ids(view: &UnreadView) -> Vec<&str> {
        view.unread.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_read_ids_never_survive() {
        let all = vec![record("n1"), record("n2"), record("n3")];
        let read: HashSet<String> = ["n1", "n3"].iter().map(|s| s.to_string()).collect();

        let view = reconcile(&all, &read);
        assert_eq!(ids(&view), vec!["n2"]);
        for id in &read {
            assert!(!view.unread.iter().any(|n| &n.id == id));
        }
    }

    #[test]
    fn test_count_matches_unread_length() {
        let all = vec![record("n1"), record("n2")];

        let view = reconcile(&all, &HashSet::new());
        assert_eq!(view.count, view.unread.len());

        let read: HashSet<String> = ["n1", "n2"].iter().map(|s| s.to_string()).collect();
        let view = reconcile(&all, &read);
        assert_eq!(view.count, 0);
        assert_eq!(view.count, view.unread.len());
    }

    #[test]
    fn test_surviving_order_matches_input_order() {
        let all = vec![
            record("n5"),
            record("n2"),
            record("n9"),
            record("n1"),
            record("n7"),
        ];
        let read: HashSet<String> = ["n2", "n1"].iter().map(|s| s.to_string()).collect();

        let view = reconcile(&all, &read);
        assert_eq!(ids(&view), vec!["n5", "n9", "n7"]);
    }

    #[test]
    fn test_empty_inputs() {
        let view = reconcile(&[], &HashSet::new());
        assert!(view.unread.is_empty());
        assert_eq!(view.count, 0);

        let read: HashSet<String> = ["n1".to_string()].into_iter().collect();
        let view = reconcile(&[], &read);
        assert_eq!(view.count, 0);
    }

    #[test]
    fn test_duplicate_items_inflate_the_view() {
        // Disjoint pages are the backend's contract; duplicates pass through.
        let all = vec![record("n1"), record("n1")];
        let view = reconcile(&all, &HashSet::new());
        assert_eq!(view.count, 2);
    }
}
