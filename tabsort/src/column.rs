//! Column definitions.

use serde::Deserialize;
use serde::Serialize;

use crate::error::SortError;

/// Column configuration.
///
/// A column is identified by its value path, which is also the key rows are
/// looked up by when sorting. Columns sort and resize unless told otherwise,
/// both when built and when deserialized without the flags. Columns are
/// immutable once handed to a [`SortEngine`](crate::SortEngine).
///
/// # Examples
///
/// ```
/// use tabsort::Column;
///
/// let columns = vec![
///     Column::new("id", "ID").sortable(false).resizable(false),
///     Column::new("name", "Name"),
/// ];
/// assert!(!columns[0].sortable);
/// assert!(columns[1].sortable && columns[1].resizable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Row field this column reads.
    pub value_path: String,
    /// Header text.
    #[serde(default)]
    pub label: String,
    /// Whether header clicks sort by this column.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Whether the header exposes a resize handle.
    #[serde(default = "default_true")]
    pub resizable: bool,
}

fn default_true() -> bool {
    true
}

impl Column {
    /// Create a new sortable, resizable column.
    pub fn new(value_path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value_path: value_path.into(),
            label: label.into(),
            sortable: true,
            resizable: true,
        }
    }

    /// Set whether header clicks sort by this column.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Set whether the header exposes a resize handle.
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// An ordered set of columns keyed by value path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    columns: Vec<Column>,
}

impl Columns {
    /// Build a column set, rejecting repeated value paths.
    pub fn new(columns: Vec<Column>) -> Result<Self, SortError> {
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.value_path == column.value_path) {
                return Err(SortError::DuplicateDefinition(column.value_path.clone()));
            }
        }
        Ok(Self { columns })
    }

    /// Look up a column by value path.
    pub fn get(&self, value_path: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.value_path == value_path)
    }

    /// Look up a column that a sort may reference.
    ///
    /// Fails if the column is unknown or not sortable.
    pub fn sortable(&self, value_path: &str) -> Result<&Column, SortError> {
        let column = self
            .get(value_path)
            .ok_or_else(|| SortError::UnknownColumn(value_path.to_string()))?;
        if !column.sortable {
            return Err(SortError::NotSortable(value_path.to_string()));
        }
        Ok(column)
    }

    /// Iterate columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
