//! Push-based snapshot delivery. The record store owns a process-local cache
//! of each collection; consumers subscribe, receive the current snapshot
//! immediately and a fresh full snapshot on every publish, and unsubscribe on
//! teardown. The aggregation engine never sees this type; it is re-invoked
//! with plain slices on each snapshot.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn Fn(&[T]) + Send + Sync>;

pub struct LiveFeed<T> {
    current: Vec<T>,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
}

impl<T> LiveFeed<T> {
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// Registers a callback and delivers the current snapshot to it at once.
    pub fn subscribe(&mut self, callback: impl Fn(&[T]) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        callback(&self.current);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Replaces the cached snapshot and notifies every subscriber.
    pub fn publish(&mut self, snapshot: Vec<T>) {
        self.current = snapshot;
        for (_, callback) in &self.subscribers {
            callback(&self.current);
        }
    }

    /// Drops a subscription. Returns false when the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn snapshot(&self) -> &[T] {
        &self.current
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T> Default for LiveFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn subscribers_receive_initial_and_subsequent_snapshots() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut feed = LiveFeed::new();
        let sink = Arc::clone(&seen);
        feed.subscribe(move |snapshot: &[u32]| {
            sink.lock().unwrap().push(snapshot.len());
        });
        feed.publish(vec![1, 2, 3]);
        feed.publish(vec![4]);
        assert_eq!(*seen.lock().unwrap(), vec![0, 3, 1]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let seen = Arc::new(Mutex::new(0usize));
        let mut feed = LiveFeed::new();
        let sink = Arc::clone(&seen);
        let id = feed.subscribe(move |_: &[u32]| {
            *sink.lock().unwrap() += 1;
        });
        feed.publish(vec![1]);
        assert!(feed.unsubscribe(id));
        feed.publish(vec![2]);
        assert_eq!(*seen.lock().unwrap(), 2);
        assert!(!feed.unsubscribe(id));
    }

    #[test]
    fn snapshot_reflects_last_publish() {
        let mut feed: LiveFeed<u32> = LiveFeed::new();
        feed.publish(vec![7, 8]);
        assert_eq!(feed.snapshot(), &[7, 8]);
    }
}
