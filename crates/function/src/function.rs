//! The function contract
//!
//! A function is a unit of server-side logic a client invokes by id against
//! a region, much like a stored procedure. Each invocation gets a
//! [`FunctionContext`] and produces exactly one result: the `Ok` value, or
//! the error.

use regionfn_core::{Arguments, Result, Value};
use regionfn_storage::Region;

/// Server-side logic invoked by id.
pub trait Function: Send + Sync {
    /// Stable identifier used for registration and dispatch
    fn id(&self) -> &str;

    /// Run one invocation.
    fn execute(&self, ctx: &FunctionContext<'_>) -> Result<Value>;
}

/// Everything an invocation may touch.
///
/// The region is borrowed for the call; functions never own or close it.
pub struct FunctionContext<'a> {
    arguments: &'a Arguments,
    region: &'a dyn Region,
}

impl<'a> FunctionContext<'a> {
    /// Build a context for one invocation
    pub fn new(arguments: &'a Arguments, region: &'a dyn Region) -> Self {
        Self { arguments, region }
    }

    /// Arguments the caller supplied
    pub fn arguments(&self) -> &'a Arguments {
        self.arguments
    }

    /// Region the function runs against
    pub fn data_region(&self) -> &'a dyn Region {
        self.region
    }
}

impl std::fmt::Debug for FunctionContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionContext")
            .field("arguments", &self.arguments)
            .field("region", &self.region.name())
            .finish()
    }
}
