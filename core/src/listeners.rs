//! Observer registry owned by a [`crate::security::SecurityService`].

use std::sync::Arc;

use catwatch_common::ports::listener::StatusListener;
use catwatch_common::status::AlarmStatus;

/// A notification waiting to be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmEvent {
    StatusChanged(AlarmStatus),
    CatDetected(bool),
    SensorStatusChanged,
}

impl AlarmEvent {
    fn deliver(self, listener: &dyn StatusListener) {
        match self {
            AlarmEvent::StatusChanged(status) => listener.on_status_changed(status),
            AlarmEvent::CatDetected(cat) => listener.on_cat_detected(cat),
            AlarmEvent::SensorStatusChanged => listener.on_sensor_status_changed(),
        }
    }
}

/// Set of listeners keyed by handle identity: registering the same `Arc` twice
/// keeps one entry, clones of a handle count as the same listener.
#[derive(Default, Clone)]
pub struct ListenerRegistry {
    listeners: Vec<Arc<dyn StatusListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the listener was already registered.
    pub fn add(&mut self, listener: Arc<dyn StatusListener>) -> bool {
        if self.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    /// Returns `false` when the listener was not registered.
    pub fn remove(&mut self, listener: &Arc<dyn StatusListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !same_listener(l, listener));
        self.listeners.len() != before
    }

    pub fn contains(&self, listener: &Arc<dyn StatusListener>) -> bool {
        self.listeners.iter().any(|l| same_listener(l, listener))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn broadcast(&self, events: &[AlarmEvent]) {
        for event in events {
            for listener in &self.listeners {
                event.deliver(listener.as_ref());
            }
        }
    }
}

// Compares data pointers only; vtable pointers for the same type may differ
// between codegen units.
fn same_listener(a: &Arc<dyn StatusListener>, b: &Arc<dyn StatusListener>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
