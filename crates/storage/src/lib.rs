//! Region storage for regionfn
//!
//! This crate provides:
//! - [`Region`]: the write capability functions borrow
//! - [`MemoryRegion`]: sharded in-memory region with capacity limits,
//!   put listeners and interest registration
//! - [`RegionCatalog`]: regions addressable by name
//! - [`Query`]: the two region query shapes clients issue

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod listener;
pub mod query;
pub mod region;

pub use catalog::RegionCatalog;
pub use config::RegionConfig;
pub use listener::{PutListener, PutListeners};
pub use query::Query;
pub use region::{MemoryRegion, Region};
