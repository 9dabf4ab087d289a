//! Engine configuration

use serde::Deserialize;
use serde::Serialize;

use crate::sort::SortDescriptor;

/// Configuration for a [`SortEngine`](crate::SortEngine).
///
/// # Example
///
/// ```
/// use tabsort::{EngineConfig, SortDescriptor};
///
/// let config = EngineConfig::default()
///     .with_sort_empty_last(true)
///     .with_initial_sorts(vec![SortDescriptor::asc("name")]);
/// assert!(config.sort_empty_last);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Keep empty values (null, empty string) at the bottom in either direction.
    ///
    /// Default: false
    pub sort_empty_last: bool,

    /// Sort state the engine starts in, in priority order.
    ///
    /// Default: unsorted
    pub initial_sorts: Vec<SortDescriptor>,
}

impl EngineConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether empty values always sort last.
    pub fn with_sort_empty_last(mut self, enabled: bool) -> Self {
        self.sort_empty_last = enabled;
        self
    }

    /// Sets the initial sort state.
    pub fn with_initial_sorts(mut self, sorts: Vec<SortDescriptor>) -> Self {
        self.initial_sorts = sorts;
        self
    }
}
