//! Immutable multi-column sort state.

use std::sync::Arc;

use crate::error::SortError;

use super::descriptor::{Direction, SortDescriptor};

/// Header indicator data for one sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortIndicator {
    /// Direction glyph to show.
    pub direction: Direction,
    /// 1-based priority badge. Only present when more than one column is sorted.
    pub priority: Option<usize>,
}

/// Ordered priority list of sort descriptors.
///
/// The first descriptor is the primary key. Each column appears at most once.
/// States are never modified in place: every transition builds a new state,
/// and clones share the same backing slice, so [`SortState::same_as`] is a
/// cheap change check.
#[derive(Debug, Clone)]
pub struct SortState {
    descriptors: Arc<[SortDescriptor]>,
}

impl Default for SortState {
    fn default() -> Self {
        Self::from_unique(Vec::new())
    }
}

impl PartialEq for SortState {
    fn eq(&self, other: &Self) -> bool {
        self.descriptors == other.descriptors
    }
}

impl Eq for SortState {}

impl SortState {
    /// The unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from descriptors in priority order.
    ///
    /// Fails if a column appears more than once.
    pub fn from_descriptors(descriptors: Vec<SortDescriptor>) -> Result<Self, SortError> {
        for (i, descriptor) in descriptors.iter().enumerate() {
            if descriptors[..i]
                .iter()
                .any(|d| d.value_path == descriptor.value_path)
            {
                return Err(SortError::DuplicateColumn(descriptor.value_path.clone()));
            }
        }
        Ok(Self::from_unique(descriptors))
    }

    fn from_unique(descriptors: Vec<SortDescriptor>) -> Self {
        Self {
            descriptors: descriptors.into(),
        }
    }

    /// Descriptors in priority order.
    pub fn descriptors(&self) -> &[SortDescriptor] {
        &self.descriptors
    }

    /// Number of active sort keys.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no column is sorted.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The descriptor for a column, if it is sorted.
    pub fn get(&self, value_path: &str) -> Option<&SortDescriptor> {
        self.descriptors.iter().find(|d| d.value_path == value_path)
    }

    /// Priority index (0 = primary) of a column, if it is sorted.
    pub fn position(&self, value_path: &str) -> Option<usize> {
        self.descriptors
            .iter()
            .position(|d| d.value_path == value_path)
    }

    /// Whether both values are the same allocation (no transition in between).
    pub fn same_as(&self, other: &SortState) -> bool {
        Arc::ptr_eq(&self.descriptors, &other.descriptors)
    }

    /// Header indicator for a column, if it is sorted.
    pub fn indicator(&self, value_path: &str) -> Option<SortIndicator> {
        let index = self.position(value_path)?;
        let priority = (self.descriptors.len() > 1).then_some(index + 1);
        Some(SortIndicator {
            direction: self.descriptors[index].direction,
            priority,
        })
    }

    /// Computes the state that follows a header click on `value_path`.
    ///
    /// A plain click cycles a lone sort on the column through descending,
    /// ascending and unsorted; from any other state it starts over with the
    /// column alone, descending. A multi-select click edits the priority list:
    /// absent columns are appended descending, descending ones flip to
    /// ascending and move to the end, ascending ones are removed.
    ///
    /// The column must be sortable; callers gate that.
    pub fn apply_click(&self, value_path: &str, multi: bool) -> SortState {
        let next = if multi {
            self.multi_click(value_path)
        } else {
            self.single_click(value_path)
        };
        log::trace!(
            "[sort] click {value_path} (multi: {multi}): {:?} -> {:?}",
            self.descriptors,
            next
        );
        Self::from_unique(next)
    }

    fn single_click(&self, value_path: &str) -> Vec<SortDescriptor> {
        match &*self.descriptors {
            [only] if only.value_path == value_path => match only.direction {
                Direction::Descending => vec![SortDescriptor::asc(value_path)],
                Direction::Ascending => Vec::new(),
            },
            _ => vec![SortDescriptor::desc(value_path)],
        }
    }

    fn multi_click(&self, value_path: &str) -> Vec<SortDescriptor> {
        let mut next = self.descriptors.to_vec();
        match self.position(value_path) {
            None => next.push(SortDescriptor::desc(value_path)),
            Some(index) => {
                let removed = next.remove(index);
                if removed.direction == Direction::Descending {
                    next.push(SortDescriptor::asc(value_path));
                }
            }
        }
        next
    }
}
