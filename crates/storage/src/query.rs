//! Region queries
//!
//! Two query shapes are understood, keywords case-insensitive:
//!
//! ```text
//! SELECT DISTINCT * FROM /<region>
//! SELECT <alias>.value FROM /<region>.entries <alias> WHERE <alias>.key = '<key>'
//! ```
//!
//! The first returns every distinct value of the region. The second returns
//! the value stored under `<key>`, or nothing. Inside the quoted key a doubled
//! quote (`''`) stands for one quote. Anything else is an invalid argument.

use crate::region::Region;
use regionfn_core::{Error, Result, Value};

/// A parsed query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `SELECT DISTINCT * FROM /<region>`
    DistinctValues {
        /// Region to scan
        region: String,
    },
    /// `SELECT e.value FROM /<region>.entries e WHERE e.key = '<key>'`
    ValueByKey {
        /// Region to read
        region: String,
        /// Key to match
        key: String,
    },
}

impl Query {
    /// Parse query text
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        // ASCII uppercasing keeps byte offsets intact
        let upper = text.to_ascii_uppercase();
        match upper.find(" WHERE ") {
            Some(at) => parse_value_by_key(&text[..at], text[at + " WHERE ".len()..].trim(), text),
            None => parse_distinct(text),
        }
    }

    /// Name of the region this query reads
    pub fn region(&self) -> &str {
        match self {
            Query::DistinctValues { region } | Query::ValueByKey { region, .. } => region,
        }
    }

    /// Run the query against `region`.
    ///
    /// Distinct values come back in key order of their first occurrence.
    pub fn execute(&self, region: &dyn Region) -> Vec<Value> {
        match self {
            Query::DistinctValues { .. } => {
                let mut values: Vec<Value> = Vec::new();
                for key in region.keys() {
                    if let Some(value) = region.get(&key) {
                        if !values.contains(&value) {
                            values.push(value);
                        }
                    }
                }
                values
            }
            Query::ValueByKey { key, .. } => region.get(key).into_iter().collect(),
        }
    }
}

fn unsupported(text: &str) -> Error {
    Error::invalid_argument(format!("unsupported query: {}", text))
}

fn parse_distinct(text: &str) -> Result<Query> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [select, distinct, "*", from, path]
            if select.eq_ignore_ascii_case("SELECT")
                && distinct.eq_ignore_ascii_case("DISTINCT")
                && from.eq_ignore_ascii_case("FROM") =>
        {
            Ok(Query::DistinctValues {
                region: region_path(path).ok_or_else(|| unsupported(text))?.to_string(),
            })
        }
        _ => Err(unsupported(text)),
    }
}

fn parse_value_by_key(select_part: &str, predicate: &str, text: &str) -> Result<Query> {
    let tokens: Vec<&str> = select_part.split_whitespace().collect();
    let [select, projection, from, path, alias] = tokens.as_slice() else {
        return Err(unsupported(text));
    };
    if !select.eq_ignore_ascii_case("SELECT") || !from.eq_ignore_ascii_case("FROM") {
        return Err(unsupported(text));
    }
    if *projection != format!("{}.value", alias) {
        return Err(unsupported(text));
    }
    let region = path
        .strip_suffix(".entries")
        .and_then(region_path)
        .ok_or_else(|| unsupported(text))?;

    let key = predicate
        .strip_prefix(&format!("{}.key", alias))
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('='))
        .map(str::trim)
        .and_then(string_literal)
        .ok_or_else(|| unsupported(text))?;

    Ok(Query::ValueByKey {
        region: region.to_string(),
        key,
    })
}

/// `/name` → `name`
fn region_path(path: &str) -> Option<&str> {
    path.strip_prefix('/').filter(|name| !name.is_empty() && !name.contains('/'))
}

/// `'it''s'` → `it's`
fn string_literal(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\'' {
            // a lone quote ends the literal early
            if chars.next() != Some('\'') {
                return None;
            }
        }
        out.push(c);
    }
    Some(out)
}
