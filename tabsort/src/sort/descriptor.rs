//! Ordering types for table columns.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Whether this is [`Direction::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Direction::Ascending
    }
}

/// One sort key: a column and the direction it is sorted in.
///
/// A column that is not sorted has no descriptor at all; there is no
/// "unsorted" direction.
///
/// # Example
///
/// ```
/// use tabsort::{Direction, SortDescriptor};
///
/// let key = SortDescriptor::desc("age");
/// assert_eq!(key.value_path, "age");
/// assert_eq!(key.direction, Direction::Descending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortDescriptor {
    /// Value path of the sorted column.
    pub value_path: String,
    /// Direction of the sort.
    pub direction: Direction,
}

impl SortDescriptor {
    /// Creates a descriptor.
    pub fn new(value_path: impl Into<String>, direction: Direction) -> Self {
        Self {
            value_path: value_path.into(),
            direction,
        }
    }

    /// Creates an ascending descriptor.
    pub fn asc(value_path: impl Into<String>) -> Self {
        Self::new(value_path, Direction::Ascending)
    }

    /// Creates a descending descriptor.
    pub fn desc(value_path: impl Into<String>) -> Self {
        Self::new(value_path, Direction::Descending)
    }
}
