//! Row comparators built from a sort state.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::row::SortableRow;
use crate::sort::{Direction, SortState};
use crate::value::Value;

/// Custom per-column value comparison.
pub type ValueCompareFn = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

static NULL: Value = Value::Null;

/// Options that tune how row values are compared.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tabsort::{CompareOptions, Value};
///
/// // Case-insensitive strings, empty cells at the bottom.
/// let options = CompareOptions::default()
///     .sort_empty_last(true)
///     .compare_with(Arc::new(|a: &Value, b: &Value| match (a, b) {
///         (Value::String(a), Value::String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
///         _ => a.natural_cmp(b),
///     }));
/// # let _ = options;
/// ```
#[derive(Clone, Default)]
pub struct CompareOptions {
    /// Place empty values after non-empty ones in either direction.
    pub sort_empty_last: bool,
    /// Replaces [`Value::natural_cmp`] when set.
    pub compare: Option<ValueCompareFn>,
}

impl fmt::Debug for CompareOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompareOptions")
            .field("sort_empty_last", &self.sort_empty_last)
            .field("compare", &self.compare.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl CompareOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether empty values always sort last.
    pub fn sort_empty_last(mut self, enabled: bool) -> Self {
        self.sort_empty_last = enabled;
        self
    }

    /// Sets a custom value comparison.
    pub fn compare_with(mut self, compare: ValueCompareFn) -> Self {
        self.compare = Some(compare);
        self
    }
}

/// Orders rows according to a [`SortState`].
///
/// Descriptors are consulted in priority order; the first one that
/// distinguishes the rows decides. Rows equal under every descriptor compare
/// [`Ordering::Equal`], so a stable sort keeps their input order.
#[derive(Debug, Clone)]
pub struct Comparator {
    state: SortState,
    options: CompareOptions,
}

impl Comparator {
    /// Creates a comparator for a state with the given options.
    pub fn new(state: SortState, options: CompareOptions) -> Self {
        Self { state, options }
    }

    /// The sort state this comparator implements.
    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Whether this comparator never reorders anything.
    pub fn is_identity(&self) -> bool {
        self.state.is_empty()
    }

    /// Compares two rows.
    pub fn compare<R: SortableRow>(&self, a: &R, b: &R) -> Ordering {
        for descriptor in self.state.descriptors() {
            let path = descriptor.value_path.as_str();
            let left = a.value(path).unwrap_or(&NULL);
            let right = b.value(path).unwrap_or(&NULL);

            let ordering = self.compare_values(left, right, descriptor.direction);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    fn compare_values(&self, left: &Value, right: &Value, direction: Direction) -> Ordering {
        if self.options.sort_empty_last {
            match (left.is_empty(), right.is_empty()) {
                (true, true) => return Ordering::Equal,
                (true, false) => return Ordering::Greater,
                (false, true) => return Ordering::Less,
                (false, false) => {}
            }
        }

        let ordering = match &self.options.compare {
            Some(compare) => compare(left, right),
            None => left.natural_cmp(right),
        };

        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }

    /// Stable in-place sort of one sibling group.
    pub fn sort<R: SortableRow>(&self, rows: &mut [&R]) {
        if self.is_identity() {
            return;
        }
        rows.sort_by(|a, b| self.compare(*a, *b));
    }
}

/// Builds a comparator for a state using default options.
pub fn build_comparator(state: &SortState) -> Comparator {
    Comparator::new(state.clone(), CompareOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Record;
    use crate::sort::SortDescriptor;

    fn person(name: &str, age: i64) -> Record {
        Record::new().set("name", name).set("age", age)
    }

    fn comparator(descriptors: Vec<SortDescriptor>) -> Comparator {
        build_comparator(&SortState::from_descriptors(descriptors).unwrap())
    }

    #[test]
    fn test_empty_state_is_always_equal() {
        let cmp = comparator(vec![]);
        assert_eq!(cmp.compare(&person("Zoe", 1), &person("Alex", 2)), Ordering::Equal);
    }

    #[test]
    fn test_descending_inverts() {
        let asc = comparator(vec![SortDescriptor::asc("age")]);
        let desc = comparator(vec![SortDescriptor::desc("age")]);
        let young = person("Zoe", 25);
        let old = person("Zoe", 34);

        assert_eq!(asc.compare(&young, &old), Ordering::Less);
        assert_eq!(desc.compare(&young, &old), Ordering::Greater);
    }

    #[test]
    fn test_falls_through_to_next_descriptor() {
        let cmp = comparator(vec![SortDescriptor::desc("age"), SortDescriptor::asc("name")]);

        assert_eq!(
            cmp.compare(&person("Alex", 34), &person("Zoe", 34)),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&person("Zoe", 34), &person("Zoe", 34)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_missing_value_sorts_as_null() {
        let cmp = comparator(vec![SortDescriptor::asc("age")]);
        let missing = Record::new().set("name", "Liz");

        assert_eq!(cmp.compare(&missing, &person("Zoe", 1)), Ordering::Less);
    }

    #[test]
    fn test_empty_last_in_both_directions() {
        let empty = Record::new().set("name", "");
        let named = Record::new().set("name", "Zoe");

        for descriptor in [SortDescriptor::asc("name"), SortDescriptor::desc("name")] {
            let state = SortState::from_descriptors(vec![descriptor]).unwrap();
            let cmp = Comparator::new(state, CompareOptions::new().sort_empty_last(true));
            assert_eq!(cmp.compare(&empty, &named), Ordering::Greater);
            assert_eq!(cmp.compare(&named, &empty), Ordering::Less);
        }
    }

    #[test]
    fn test_custom_compare_still_honors_direction() {
        let by_len: ValueCompareFn =
            Arc::new(|a: &Value, b: &Value| a.to_string().len().cmp(&b.to_string().len()));
        let state = SortState::from_descriptors(vec![SortDescriptor::desc("name")]).unwrap();
        let cmp = Comparator::new(state, CompareOptions::new().compare_with(by_len));

        assert_eq!(
            cmp.compare(&person("Al", 0), &person("Zoe", 0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let rows = [person("Zoe", 34), person("Alex", 34), person("Liz", 25)];
        let mut refs: Vec<&Record> = rows.iter().collect();
        comparator(vec![SortDescriptor::desc("age")]).sort(&mut refs);

        let names: Vec<_> = refs.iter().map(|r| r.get("name").unwrap().to_string()).collect();
        assert_eq!(names, ["Zoe", "Alex", "Liz"]);
    }
}
