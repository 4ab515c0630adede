//! Named collection of regions

use crate::config::RegionConfig;
use crate::query::Query;
use crate::region::MemoryRegion;
use parking_lot::RwLock;
use regionfn_core::{Error, Result, Value};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Regions addressable by name
#[derive(Debug, Default)]
pub struct RegionCatalog {
    regions: RwLock<FxHashMap<String, Arc<MemoryRegion>>>,
}

impl RegionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a region, or return the existing one with this name.
    ///
    /// An existing region keeps its original configuration.
    pub fn create_region(&self, name: &str, config: RegionConfig) -> Arc<MemoryRegion> {
        let mut regions = self.regions.write();
        if let Some(existing) = regions.get(name) {
            return Arc::clone(existing);
        }
        info!(region = name, max_entries = ?config.max_entries, "creating region");
        let region = Arc::new(MemoryRegion::with_config(name, config));
        regions.insert(name.to_string(), Arc::clone(&region));
        region
    }

    /// Look up a region by name
    pub fn region(&self, name: &str) -> Option<Arc<MemoryRegion>> {
        self.regions.read().get(name).cloned()
    }

    /// Names of all regions, sorted
    pub fn region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.regions.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.regions.read().len()
    }

    /// Check if no regions exist
    pub fn is_empty(&self) -> bool {
        self.regions.read().is_empty()
    }

    /// Look up a region, failing with [`Error::RegionNotFound`]
    pub fn require_region(&self, name: &str) -> Result<Arc<MemoryRegion>> {
        self.region(name).ok_or_else(|| Error::RegionNotFound {
            name: name.to_string(),
        })
    }

    /// Parse and run a query against the region it names.
    pub fn execute_query(&self, text: &str) -> Result<Vec<Value>> {
        let query = Query::parse(text)?;
        let region = self.require_region(query.region())?;
        let results = query.execute(region.as_ref());
        debug!(region = query.region(), results = results.len(), "query executed");
        Ok(results)
    }

    /// Close every region
    pub fn close_all(&self) {
        for region in self.regions.read().values() {
            region.close();
        }
    }
}
