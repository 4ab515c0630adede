//! Function invocation arguments.
//!
//! Remote clients send arguments as an untyped, ordered list. Functions
//! convert it into their own typed parameter struct at the boundary.

use crate::error::{Error, Result};
use crate::value::Value;

/// Ordered, untyped argument list of one function invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Vec<Value>);

impl Arguments {
    /// Create an argument list
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Parse the JSON array a remote client sends.
    ///
    /// Anything other than a top-level array is an invalid argument list.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(json)?;
        Self::try_from(parsed)
    }

    /// Argument at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the arguments in order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Take ownership of the underlying values
    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Arguments {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Arguments {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<serde_json::Value> for Arguments {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Array(items) => Ok(items.into_iter().map(Value::from).collect()),
            other => Err(Error::invalid_argument(format!(
                "arguments must be a JSON array, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
