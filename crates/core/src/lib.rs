//! Core types for regionfn
//!
//! This crate defines the value model stored in regions, the argument list
//! passed to server-side functions, and the error types every other crate
//! reports through.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod args;
pub mod error;
pub mod value;

pub use args::Arguments;
pub use error::{Error, Result, StoreWriteError};
pub use value::Value;
