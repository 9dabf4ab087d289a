//! Error types

use thiserror::Error;

/// Errors raised when a sort request cannot be applied to the configured columns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// No column with this value path is configured.
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    /// The column exists but does not participate in sorting.
    #[error("column is not sortable: {0}")]
    NotSortable(String),
    /// A sort state may reference each column at most once.
    #[error("column appears more than once in sort state: {0}")]
    DuplicateColumn(String),
    /// Two columns were configured with the same value path.
    #[error("duplicate column definition: {0}")]
    DuplicateDefinition(String),
}
