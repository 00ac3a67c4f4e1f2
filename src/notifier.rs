//! Change notification for broadcasting database updates to every view.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Raised after any statement that changed rows. Carries no payload:
/// subscribers reload whatever they are showing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DatabaseChanged;

/// Pub/sub notifier for broadcasting database changes to all subscribers.
#[derive(Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<DatabaseChanged>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    /// Create a new ChangeNotifier with a buffer of 100 messages.
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self { tx }
    }

    /// Subscribe to receive change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<DatabaseChanged> {
        self.tx.subscribe()
    }

    /// Broadcast a change to all subscribers. A no-op without subscribers.
    pub fn notify(&self) {
        let _ = self.tx.send(DatabaseChanged);
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
