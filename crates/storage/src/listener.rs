//! Put listeners and key interest
//!
//! Listeners are notified after each successful put, in registration order,
//! but only while interest in all keys is registered.

use parking_lot::RwLock;
use regionfn_core::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Callback invoked with the key and the newly stored value
pub type PutListener = Arc<dyn Fn(&str, &Value) + Send + Sync>;

/// Listener list plus the interest flag gating it
#[derive(Default)]
pub struct PutListeners {
    listeners: RwLock<Vec<PutListener>>,
    interest: AtomicBool,
}

impl PutListeners {
    /// Create an empty listener list with no registered interest
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener. Returns the number of listeners now registered.
    pub fn add(&self, listener: PutListener) -> usize {
        let mut listeners = self.listeners.write();
        listeners.push(listener);
        listeners.len()
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    /// Check if no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    /// Start delivering put events
    pub fn register_interest(&self) {
        self.interest.store(true, Ordering::Release);
    }

    /// Stop delivering put events. Listeners stay registered.
    pub fn unregister_interest(&self) {
        self.interest.store(false, Ordering::Release);
    }

    /// Check if put events are being delivered
    pub fn has_interest(&self) -> bool {
        self.interest.load(Ordering::Acquire)
    }

    /// Deliver a put event to every listener.
    ///
    /// The list is snapshotted first so a listener may register another
    /// listener without deadlocking.
    pub fn notify(&self, key: &str, value: &Value) {
        if !self.has_interest() {
            return;
        }
        let snapshot: Vec<PutListener> = self.listeners.read().clone();
        for listener in snapshot {
            listener(key, value);
        }
    }
}

impl std::fmt::Debug for PutListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PutListeners")
            .field("listeners", &self.len())
            .field("interest", &self.has_interest())
            .finish()
    }
}
