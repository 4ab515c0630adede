//! Convenient imports for regionfn.
//!
//! This module re-exports the most commonly used types so you can get started
//! with a single import:
//!
//! ```ignore
//! use regionfn::prelude::*;
//!
//! let grid = Grid::ephemeral()?;
//! grid.put(DEFAULT_REGION, "key", "value")?;
//! ```

// Main entry point
pub use crate::grid::{Grid, GridBuilder, DEFAULT_REGION};

// Error handling
pub use crate::error::{Error, Result};

// Core types
pub use regionfn_core::{Arguments, StoreWriteError, Value};

// Regions
pub use regionfn_storage::{MemoryRegion, Region, RegionConfig};

// Functions
pub use regionfn_function::{BulkPut, BulkPutArgs, Function, FunctionContext};

// Re-export serde_json for convenience
pub use serde_json::json;
