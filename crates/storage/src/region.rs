//! Regions: named key-value stores that functions write into
//!
//! # Design
//!
//! - [`Region`] is the narrow capability a function borrows for the
//!   duration of one invocation. Functions never own or close it.
//! - [`MemoryRegion`] keeps entries in a DashMap with FxHash. Reads are
//!   lock-free, a put only locks its target shard.
//! - Capacity-limited regions serialize inserts so the limit cannot be
//!   overshot by concurrent writers.
//! - Writes hold the write gate shared; `close` and `clear` hold it
//!   exclusively, so no put lands after `close` returns.

use crate::config::RegionConfig;
use crate::listener::{PutListener, PutListeners};
use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use regionfn_core::{StoreWriteError, Value};
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// A key-value store that functions can write into.
pub trait Region: Send + Sync {
    /// Region name
    fn name(&self) -> &str;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: Value) -> Result<(), StoreWriteError>;

    /// Current value for `key`
    fn get(&self, key: &str) -> Option<Value>;

    /// Check if `key` is present
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries
    fn len(&self) -> usize;

    /// Check if the region holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys, sorted
    fn keys(&self) -> Vec<String>;

    /// Remove every entry. Returns the number removed.
    fn clear(&self) -> Result<usize, StoreWriteError>;
}

/// In-memory region
///
/// # Example
///
/// ```ignore
/// let region = MemoryRegion::new("exampleRegion");
/// region.put("foo", Value::from("bar"))?;
/// assert_eq!(region.get("foo"), Some(Value::from("bar")));
/// ```
pub struct MemoryRegion {
    name: String,
    data: DashMap<String, Value, FxBuildHasher>,
    config: RegionConfig,
    /// Shared by writers, exclusive for `close` and `clear`
    write_gate: RwLock<()>,
    /// Held across check-and-insert when `max_entries` is set
    insert_lock: Mutex<()>,
    listeners: PutListeners,
    closed: AtomicBool,
}

impl MemoryRegion {
    /// Create an unbounded region
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, RegionConfig::default())
    }

    /// Create a region with explicit settings
    pub fn with_config(name: impl Into<String>, config: RegionConfig) -> Self {
        Self {
            name: name.into(),
            data: DashMap::with_capacity_and_hasher(config.initial_capacity, FxBuildHasher::default()),
            config,
            write_gate: RwLock::new(()),
            insert_lock: Mutex::new(()),
            listeners: PutListeners::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Settings this region was created with
    pub fn config(&self) -> &RegionConfig {
        &self.config
    }

    /// Register a callback fired after each successful put.
    ///
    /// Callbacks only fire while interest is registered, see
    /// [`MemoryRegion::register_all_keys`]. Returns the number of listeners.
    pub fn on_put<F>(&self, listener: F) -> usize
    where
        F: Fn(&str, &Value) + Send + Sync + 'static,
    {
        let listener: PutListener = std::sync::Arc::new(listener);
        self.listeners.add(listener)
    }

    /// Start delivering put events to listeners
    pub fn register_all_keys(&self) {
        self.listeners.register_interest();
    }

    /// Stop delivering put events to listeners
    pub fn unregister_all_keys(&self) {
        self.listeners.unregister_interest();
    }

    /// Check if put events are delivered
    pub fn has_interest(&self) -> bool {
        self.listeners.has_interest()
    }

    /// Reject all further writes. Reads keep working.
    pub fn close(&self) {
        let _gate = self.write_gate.write();
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!(region = %self.name, "region closed");
        }
    }

    /// Check if the region rejects writes
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn closed_error(&self) -> StoreWriteError {
        StoreWriteError::RegionClosed {
            region: self.name.clone(),
        }
    }

    fn insert(&self, key: &str, value: Value) -> Result<(), StoreWriteError> {
        let Some(limit) = self.config.max_entries else {
            self.data.insert(key.to_string(), value);
            return Ok(());
        };

        let _guard = self.insert_lock.lock();
        if !self.data.contains_key(key) && self.data.len() >= limit {
            return Err(StoreWriteError::CapacityExceeded {
                region: self.name.clone(),
                key: key.to_string(),
                limit,
            });
        }
        self.data.insert(key.to_string(), value);
        Ok(())
    }
}

impl Region for MemoryRegion {
    fn name(&self) -> &str {
        &self.name
    }

    fn put(&self, key: &str, value: Value) -> Result<(), StoreWriteError> {
        let gate = self.write_gate.read();
        if self.is_closed() {
            return Err(self.closed_error());
        }
        if self.listeners.is_empty() || !self.listeners.has_interest() {
            return self.insert(key, value);
        }
        self.insert(key, value.clone())?;
        // Listeners run outside the gate so they may write back into the region
        drop(gate);
        self.listeners.notify(key, &value);
        Ok(())
    }

    #[inline]
    fn get(&self, key: &str) -> Option<Value> {
        self.data.get(key).map(|entry| entry.value().clone())
    }

    fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.data.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    fn clear(&self) -> Result<usize, StoreWriteError> {
        let _gate = self.write_gate.write();
        if self.is_closed() {
            return Err(self.closed_error());
        }
        let removed = self.data.len();
        self.data.clear();
        debug!(region = %self.name, removed, "region cleared");
        Ok(removed)
    }
}

impl std::fmt::Debug for MemoryRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryRegion")
            .field("name", &self.name)
            .field("entries", &self.data.len())
            .field("config", &self.config)
            .field("listeners", &self.listeners)
            .field("closed", &self.is_closed())
            .finish()
    }
}
