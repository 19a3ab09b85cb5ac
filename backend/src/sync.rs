//! Live-query plumbing: a per-user channel of full entry snapshots.
//!
//! Every change to a user's entry set publishes the complete current set,
//! never a diff. Consumers that fall behind only ever observe the latest
//! snapshot (last-write-wins), which is exactly the supersession behavior
//! the watch channel provides.

use shared::Entry;
use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::watch;

/// Registry of per-user snapshot channels.
#[derive(Default)]
pub struct EntryFeed {
    channels: RwLock<HashMap<String, watch::Sender<Vec<Entry>>>>,
}

impl EntryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current snapshot for `user_id`, waking all subscribers.
    pub fn publish(&self, user_id: &str, entries: Vec<Entry>) {
        let mut channels = self.channels.write().expect("entry feed lock poisoned");
        match channels.get(user_id) {
            Some(sender) => {
                sender.send_replace(entries);
            }
            None => {
                let (sender, _receiver) = watch::channel(entries);
                channels.insert(user_id.to_string(), sender);
            }
        }
    }

    /// Subscribe to a user's snapshot stream.
    ///
    /// `initial` seeds the channel when this is the first interest in the
    /// user; an existing channel already holds the latest snapshot and the
    /// seed is ignored. The receiver's current value is always observable
    /// immediately, so late subscribers start from the present state.
    pub fn subscribe(&self, user_id: &str, initial: Vec<Entry>) -> watch::Receiver<Vec<Entry>> {
        let mut channels = self.channels.write().expect("entry feed lock poisoned");
        channels
            .entry(user_id.to_string())
            .or_insert_with(|| watch::channel(initial).0)
            .subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: &str, amount: f64) -> Entry {
        Entry {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount,
            timestamp: 1_704_067_200_000,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_subscriber_sees_seed_snapshot_immediately() {
        let feed = EntryFeed::new();

        let receiver = feed.subscribe("user-1", vec![entry("e1", 50.0)]);
        let snapshot = receiver.borrow();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, "e1");
    }

    #[tokio::test]
    async fn test_publish_wakes_subscriber_with_full_snapshot() {
        let feed = EntryFeed::new();

        let mut receiver = feed.subscribe("user-1", vec![]);
        feed.publish("user-1", vec![entry("e1", 50.0), entry("e2", -20.0)]);

        receiver.changed().await.expect("sender dropped");
        let snapshot = receiver.borrow_and_update();
        assert_eq!(snapshot.len(), 2);
    }

    #[tokio::test]
    async fn test_superseded_snapshot_is_skipped() {
        let feed = EntryFeed::new();

        let mut receiver = feed.subscribe("user-1", vec![]);

        // Two publishes before the consumer gets around to looking
        feed.publish("user-1", vec![entry("e1", 50.0)]);
        feed.publish("user-1", vec![entry("e1", 50.0), entry("e2", -20.0)]);

        receiver.changed().await.expect("sender dropped");
        let snapshot = receiver.borrow_and_update().clone();
        assert_eq!(snapshot.len(), 2, "consumer must only observe the latest snapshot");

        // Nothing further is pending
        assert!(!receiver.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_late_subscriber_starts_from_latest_snapshot() {
        let feed = EntryFeed::new();

        feed.publish("user-1", vec![entry("e1", 50.0)]);
        feed.publish("user-1", vec![entry("e1", 50.0), entry("e2", -20.0)]);

        // The seed is ignored because the channel already exists
        let receiver = feed.subscribe("user-1", vec![]);
        assert_eq!(receiver.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_feeds_are_isolated_per_user() {
        let feed = EntryFeed::new();

        let alice = feed.subscribe("alice", vec![]);
        let bob = feed.subscribe("bob", vec![]);

        feed.publish("alice", vec![entry("e1", 50.0)]);

        assert_eq!(alice.borrow().len(), 1);
        assert!(bob.borrow().is_empty());
    }
}
