//! Main entry point for regionfn.
//!
//! This module provides the `Grid` struct: a set of named regions plus the
//! functions clients may execute against them.

use crate::error::{Error, Result};
use regionfn_core::{Arguments, Value};
use regionfn_function::{Function, FunctionService};
use regionfn_storage::{MemoryRegion, Region, RegionCatalog, RegionConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// Region created by [`Grid::ephemeral`]
pub const DEFAULT_REGION: &str = "exampleRegion";

/// An in-process data grid.
///
/// # Example
///
/// ```ignore
/// use regionfn::prelude::*;
///
/// let grid = Grid::ephemeral()?;
///
/// grid.execute_function(BulkPut::ID, DEFAULT_REGION, vec![Value::from("x"), Value::Float(3.0)].into())?;
/// assert_eq!(grid.get(DEFAULT_REGION, "foo2")?, Some(Value::from("x")));
///
/// grid.close();
/// ```
pub struct Grid {
    regions: RegionCatalog,
    functions: FunctionService,
    closed: AtomicBool,
}

impl Grid {
    /// Open a grid with one unbounded region named [`DEFAULT_REGION`] and the
    /// built-in functions.
    pub fn ephemeral() -> Result<Self> {
        Self::builder().region(DEFAULT_REGION).open()
    }

    /// Create a builder for grid configuration.
    pub fn builder() -> GridBuilder {
        GridBuilder::new()
    }

    /// Crate version string
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Look up a region by name
    pub fn region(&self, name: &str) -> Option<Arc<MemoryRegion>> {
        self.regions.region(name)
    }

    /// Create a region, or return the existing one with this name
    pub fn create_region(&self, name: &str, config: RegionConfig) -> Result<Arc<MemoryRegion>> {
        self.ensure_open()?;
        Ok(self.regions.create_region(name, config))
    }

    /// Names of all regions, sorted
    pub fn region_names(&self) -> Vec<String> {
        self.regions.region_names()
    }

    /// Store a value in a named region. Returns the stored value.
    pub fn put(&self, region: &str, key: &str, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        self.require_region(region)?.put(key, value.clone())?;
        Ok(value)
    }

    /// Read a value from a named region.
    pub fn get(&self, region: &str, key: &str) -> Result<Option<Value>> {
        Ok(self.require_region(region)?.get(key))
    }

    /// Remove every entry of a named region. Returns the number removed.
    ///
    /// Fails once the grid is closed.
    pub fn clear(&self, region: &str) -> Result<usize> {
        Ok(self.require_region(region)?.clear()?)
    }

    /// Run a query against the region it names.
    ///
    /// Supported shapes:
    ///
    /// ```text
    /// SELECT DISTINCT * FROM /exampleRegion
    /// SELECT entry.value FROM /exampleRegion.entries entry WHERE entry.key = 'string2'
    /// ```
    ///
    /// Any other query fails with [`Error::InvalidArgument`].
    pub fn execute_query(&self, query: &str) -> Result<Vec<Value>> {
        self.regions.execute_query(query).map_err(Error::from)
    }

    /// Register an additional function
    pub fn register_function(&self, function: Arc<dyn Function>) -> Result<()> {
        self.functions.register(function).map_err(Error::from)
    }

    /// The function registry
    pub fn functions(&self) -> &FunctionService {
        &self.functions
    }

    /// Execute function `id` against the region named `region`.
    ///
    /// Returns the function's single result.
    pub fn execute_function(&self, id: &str, region: &str, arguments: Arguments) -> Result<Value> {
        self.ensure_open()?;
        let region = self.require_region(region)?;
        self.functions
            .execute(id, region.as_ref(), &arguments)
            .map_err(Error::from)
    }

    /// Execute a function with arguments given as a JSON array.
    ///
    /// This is the form remote clients send; the result is returned as JSON.
    pub fn execute_function_json(
        &self,
        id: &str,
        region: &str,
        arguments: &str,
    ) -> Result<serde_json::Value> {
        let arguments = Arguments::from_json(arguments)?;
        Ok(self.execute_function(id, region, arguments)?.into_json())
    }

    /// Close the grid.
    ///
    /// Every region stops accepting writes and further function executions
    /// fail with [`Error::Closed`]. Reads keep working.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            self.regions.close_all();
            info!(regions = self.regions.len(), "grid closed");
        }
    }

    /// Check if the grid has been closed
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::Closed);
        }
        Ok(())
    }

    fn require_region(&self, name: &str) -> Result<Arc<MemoryRegion>> {
        self.regions.require_region(name).map_err(Error::from)
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("regions", &self.regions.region_names())
            .field("functions", &self.functions)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Builder for grid configuration.
///
/// # Example
///
/// ```ignore
/// let grid = Grid::builder()
///     .region("exampleRegion")
///     .region_with("bounded", RegionConfig::default().with_max_entries(100))
///     .open()?;
/// ```
pub struct GridBuilder {
    regions: Vec<(String, RegionConfig)>,
    functions: Vec<Arc<dyn Function>>,
    builtins: bool,
}

impl GridBuilder {
    /// Create a new builder with no regions and the built-in functions.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            functions: Vec::new(),
            builtins: true,
        }
    }

    /// Add an unbounded region
    pub fn region(self, name: impl Into<String>) -> Self {
        self.region_with(name, RegionConfig::default())
    }

    /// Add a region with explicit settings
    pub fn region_with(mut self, name: impl Into<String>, config: RegionConfig) -> Self {
        self.regions.push((name.into(), config));
        self
    }

    /// Register an additional function
    pub fn with_function(mut self, function: Arc<dyn Function>) -> Self {
        self.functions.push(function);
        self
    }

    /// Start with an empty function registry
    pub fn without_builtin_functions(mut self) -> Self {
        self.builtins = false;
        self
    }

    /// Open the grid.
    ///
    /// Fails if two functions share an id.
    pub fn open(self) -> Result<Grid> {
        let functions = if self.builtins {
            FunctionService::with_builtins()
        } else {
            FunctionService::new()
        };
        for function in self.functions {
            functions.register(function)?;
        }

        let regions = RegionCatalog::new();
        for (name, config) in self.regions {
            regions.create_region(&name, config);
        }

        info!(
            regions = regions.len(),
            functions = functions.function_ids().len(),
            "grid opened"
        );

        Ok(Grid {
            regions,
            functions,
            closed: AtomicBool::new(false),
        })
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}
