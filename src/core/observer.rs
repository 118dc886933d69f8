//! Lot observers.
//!
//! Observers are notified synchronously, in registration order, after a lot
//! reports a full park attempt or frees a slot. Notification cannot fail; a
//! panicking observer unwinds through the operation that triggered it.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Event broadcast to lot observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LotEvent {
    /// A park attempt found no empty slot.
    Full,
    /// A slot was freed.
    Available,
}

impl LotEvent {
    /// Wire message for the event.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "FULL",
            Self::Available => "AVAILABLE",
        }
    }
}

impl fmt::Display for LotEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler registered on a lot.
///
/// Observers receive a typed [`LotEvent`] rather than a free-form message, so
/// only `FULL` and `AVAILABLE` can be delivered. Use [`LotEvent::as_str`] or
/// `Display` when the string form is needed.
pub trait LotObserver {
    /// Receive an event raised by the lot named `lot`.
    fn notify(&self, lot: &str, event: LotEvent);
}

impl<F> LotObserver for F
where
    F: Fn(&str, LotEvent),
{
    fn notify(&self, lot: &str, event: LotEvent) {
        self(lot, event);
    }
}

/// Recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Lot that raised the event.
    pub lot: String,
    /// Event raised.
    pub event: LotEvent,
}

/// Observer keeping a bounded log of events.
///
/// Clones share one log, so a caller can keep a handle after registering a
/// clone on a lot. The oldest entry is dropped once `max_events` is reached.
#[derive(Debug, Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<VecDeque<RecordedEvent>>>,
    max_events: usize,
}

impl RecordingObserver {
    /// Create an observer retaining at most `max_events` entries.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events.min(1024)))),
            max_events,
        }
    }

    /// Snapshot of recorded events, oldest first.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Number of recorded occurrences of `event`.
    pub fn count(&self, event: LotEvent) -> usize {
        self.events.lock().iter().filter(|e| e.event == event).count()
    }
}

impl LotObserver for RecordingObserver {
    fn notify(&self, lot: &str, event: LotEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(RecordedEvent {
            lot: lot.to_owned(),
            event,
        });
    }
}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl LotObserver for TracingObserver {
    fn notify(&self, lot: &str, event: LotEvent) {
        tracing::info!(lot, event = %event, "lot event");
    }
}
