//! Bulk put: store one value under `count` generated keys
//!
//! Test harnesses call this to populate a region before asserting on it.
//!
//! ## Arguments
//!
//! `[value, count]`. `value` is opaque. `count` is a number, truncated
//! toward zero; zero, negative and NaN counts write nothing.
//!
//! ## Keys
//!
//! `"foo"` followed by the decimal index: `foo0`, `foo1`, ... `foo{count-1}`,
//! written in increasing order.
//!
//! ## Failure
//!
//! Fail-fast. The first rejected put aborts the loop; earlier writes stay.
//! No retries.

use crate::function::{Function, FunctionContext};
use regionfn_core::{Arguments, Error, Result, StoreWriteError, Value};
use regionfn_storage::Region;
use tracing::{debug, warn};

/// Prefix of every generated key
pub const KEY_PREFIX: &str = "foo";

/// Key written for index `i`
#[inline]
pub fn bulk_put_key(i: u64) -> String {
    format!("{}{}", KEY_PREFIX, i)
}

/// Validated bulk put parameters
#[derive(Debug, Clone, PartialEq)]
pub struct BulkPutArgs {
    /// Value stored under every key
    pub value: Value,
    /// Number of keys to write
    pub count: u64,
}

impl BulkPutArgs {
    /// Parameters for writing `value` under `count` keys
    pub fn new(value: impl Into<Value>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

impl TryFrom<&Arguments> for BulkPutArgs {
    type Error = Error;

    fn try_from(args: &Arguments) -> Result<Self> {
        let (Some(value), Some(count)) = (args.get(0), args.get(1)) else {
            return Err(Error::invalid_argument(format!(
                "bulk put expects [value, count], got {} argument(s)",
                args.len()
            )));
        };
        Ok(Self {
            value: value.clone(),
            count: truncate_count(count)?,
        })
    }
}

fn truncate_count(count: &Value) -> Result<u64> {
    // `as` truncates toward zero, saturates, and maps NaN to 0
    count.as_number().map(|n| n as u64).ok_or_else(|| {
        Error::invalid_argument(format!(
            "bulk put count must be a number, got {}",
            count.type_name()
        ))
    })
}

/// Write `args.value` under `foo0..foo{count-1}`.
///
/// Returns at the first rejected write.
pub fn bulk_put(
    region: &dyn Region,
    args: &BulkPutArgs,
) -> std::result::Result<(), StoreWriteError> {
    for i in 0..args.count {
        if let Err(e) = region.put(&bulk_put_key(i), args.value.clone()) {
            warn!(region = region.name(), index = i, error = %e, "bulk put aborted");
            return Err(e);
        }
    }
    Ok(())
}

/// The bulk put function.
#[derive(Debug, Clone, Copy, Default)]
pub struct BulkPut;

impl BulkPut {
    /// Fully-qualified type path, used as the dispatch id
    pub const ID: &'static str = "regionfn_function::bulk_put::BulkPut";
}

impl Function for BulkPut {
    fn id(&self) -> &str {
        Self::ID
    }

    fn execute(&self, ctx: &FunctionContext<'_>) -> Result<Value> {
        let args = BulkPutArgs::try_from(ctx.arguments())?;
        let region = ctx.data_region();

        debug!(region = region.name(), count = args.count, "bulk put starting");
        bulk_put(region, &args)?;
        debug!(region = region.name(), count = args.count, "bulk put finished");

        Ok(Value::Bool(true))
    }
}
