//! Typed list filters.
//!
//! Each entity declares its own filter struct; only the fields that are set
//! end up in the query string.

use std::fmt::Debug;

pub trait ListFilter: Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Non-empty filter values as `(query key, value)` pairs.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;

    fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }
}

/// Filter for lists that only support free-text search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFilter;

impl ListFilter for NoFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// Pushes `key=value` when the value is present and not blank.
pub fn push_opt(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        pairs.push((key, value.to_string()));
    }
}
