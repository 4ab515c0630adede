//! Region configuration

use regionfn_core::Result;
use serde::{Deserialize, Serialize};

/// Per-region settings.
///
/// # Example
///
/// ```ignore
/// let config = RegionConfig::default().with_max_entries(1_000);
/// let config = RegionConfig::from_json(r#"{"max_entries": 1000}"#)?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionConfig {
    /// Maximum number of distinct keys. `None` means unbounded.
    ///
    /// Overwriting a key that is already present never counts against the
    /// limit.
    pub max_entries: Option<usize>,

    /// Pre-allocated capacity hint
    pub initial_capacity: usize,
}

impl RegionConfig {
    /// Limit the number of distinct keys
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Pre-allocate room for `capacity` entries
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
