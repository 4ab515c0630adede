//! # regionfn
//!
//! Embedded data-grid regions with server-side functions.
//!
//! A [`Grid`] holds named key-value regions and a registry of functions that
//! clients invoke by id against a region, much like stored procedures. The
//! built-in [`BulkPut`](regionfn_function::BulkPut) function populates a
//! region with one value under generated keys, for test harnesses that need
//! data to assert against.
//!
//! ## Quick Start
//!
//! ```ignore
//! use regionfn::prelude::*;
//!
//! let grid = Grid::ephemeral()?;
//!
//! // Write "x" under foo0, foo1, foo2
//! let args = Arguments::new(vec![Value::from("x"), Value::Float(3.0)]);
//! let result = grid.execute_function(BulkPut::ID, DEFAULT_REGION, args)?;
//! assert_eq!(result, Value::Bool(true));
//!
//! // Same call in the JSON form remote clients use
//! grid.execute_function_json(BulkPut::ID, DEFAULT_REGION, r#"["x", 3]"#)?;
//!
//! grid.close();
//! ```
//!
//! ## Crates
//!
//! - `regionfn-core` - [`Value`], [`Arguments`], core errors
//! - `regionfn-storage` - regions, listeners, region catalog
//! - `regionfn-function` - function contract, bulk put, dispatch

#![warn(missing_docs)]

mod error;
mod grid;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use grid::{Grid, GridBuilder, DEFAULT_REGION};

// Re-export member crates
pub use regionfn_core::{Arguments, StoreWriteError, Value};
pub use regionfn_function as function;
pub use regionfn_storage as storage;
