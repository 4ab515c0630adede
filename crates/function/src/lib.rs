//! Server-side functions for regionfn
//!
//! - [`Function`] / [`FunctionContext`]: the invocation contract
//! - [`BulkPut`]: writes one value under generated keys `foo0..foo{n-1}`
//! - [`FunctionService`]: registry that dispatches invocations by id

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bulk_put;
pub mod function;
pub mod service;

pub use bulk_put::{bulk_put, bulk_put_key, BulkPut, BulkPutArgs, KEY_PREFIX};
pub use function::{Function, FunctionContext};
pub use service::FunctionService;
