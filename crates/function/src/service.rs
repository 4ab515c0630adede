//! Function registry and dispatch
//!
//! Clients address functions by id. The service looks the id up, builds a
//! [`FunctionContext`] and runs the function on the caller's thread.

use crate::bulk_put::BulkPut;
use crate::function::{Function, FunctionContext};
use parking_lot::RwLock;
use regionfn_core::{Arguments, Error, Result, Value};
use regionfn_storage::Region;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::debug;

/// Registered functions, keyed by id
#[derive(Default)]
pub struct FunctionService {
    functions: RwLock<FxHashMap<String, Arc<dyn Function>>>,
}

impl FunctionService {
    /// Create an empty service
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with the built-in functions registered
    pub fn with_builtins() -> Self {
        let service = Self::new();
        service
            .functions
            .write()
            .insert(BulkPut::ID.to_string(), Arc::new(BulkPut));
        service
    }

    /// Register a function under its id.
    ///
    /// Fails with [`Error::DuplicateFunction`] if the id is taken.
    pub fn register(&self, function: Arc<dyn Function>) -> Result<()> {
        let id = function.id().to_string();
        let mut functions = self.functions.write();
        if functions.contains_key(&id) {
            return Err(Error::DuplicateFunction { id });
        }
        debug!(function = %id, "function registered");
        functions.insert(id, function);
        Ok(())
    }

    /// Remove a function. Returns it if it was registered.
    pub fn unregister(&self, id: &str) -> Option<Arc<dyn Function>> {
        self.functions.write().remove(id)
    }

    /// Check if `id` is registered
    pub fn is_registered(&self, id: &str) -> bool {
        self.functions.read().contains_key(id)
    }

    /// Registered ids, sorted
    pub fn function_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.functions.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Run the function registered as `id` against `region`.
    pub fn execute(&self, id: &str, region: &dyn Region, arguments: &Arguments) -> Result<Value> {
        // Release the registry lock before running user code
        let function = self
            .functions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| Error::FunctionNotFound { id: id.to_string() })?;

        debug!(function = id, region = region.name(), args = arguments.len(), "executing function");
        function.execute(&FunctionContext::new(arguments, region))
    }
}

impl std::fmt::Debug for FunctionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionService")
            .field("functions", &self.function_ids())
            .finish()
    }
}
