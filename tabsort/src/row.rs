//! Row trait and the stock record type.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::value::Value;

/// Trait for items that can be sorted and flattened as table rows.
///
/// Rows form a tree: each row owns its ordered children. Implement this for
/// your own row type, or use [`Record`].
///
/// # Example
///
/// ```
/// use tabsort::{SortableRow, Value};
///
/// struct Employee {
///     name: Value,
///     reports: Vec<Employee>,
/// }
///
/// impl SortableRow for Employee {
///     fn value(&self, value_path: &str) -> Option<&Value> {
///         (value_path == "name").then_some(&self.name)
///     }
///
///     fn children(&self) -> &[Self] {
///         &self.reports
///     }
/// }
/// ```
pub trait SortableRow: Sized {
    /// Value stored under a column's value path, if any.
    ///
    /// Missing values sort as [`Value::Null`].
    fn value(&self, value_path: &str) -> Option<&Value>;

    /// Child rows. Empty for leaves.
    fn children(&self) -> &[Self];

    /// Whether the row's children are hidden from visible flattening.
    fn is_collapsed(&self) -> bool {
        false
    }
}

/// A dynamic row holding field values by name plus nested child rows.
///
/// In JSON, values live under `fields`, next to `children` and `collapsed`,
/// so any field name is usable as a column value path:
///
/// ```json
/// { "fields": { "name": "Zoe", "children": 2 }, "children": [] }
/// ```
///
/// # Example
///
/// ```
/// use tabsort::Record;
///
/// let row = Record::new()
///     .set("name", "Zoe")
///     .set("age", 34)
///     .child(Record::new().set("name", "Liz"));
///
/// assert_eq!(row.get("name"), Some(&"Zoe".into()));
/// assert_eq!(row.children().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The field values.
    #[serde(default)]
    fields: HashMap<String, Value>,

    /// Child rows, in their original order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Record>,

    /// Whether the children are hidden.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    collapsed: bool,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder style).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Appends a child row (builder style).
    pub fn child(mut self, child: Record) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the child rows (builder style).
    pub fn with_children(mut self, children: Vec<Record>) -> Self {
        self.children = children;
        self
    }

    /// Marks the record collapsed (builder style).
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Sets a field value in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns all field values.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns the child rows.
    pub fn children(&self) -> &[Record] {
        &self.children
    }

    /// Collapse or expand the record in place.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Total number of rows in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Record::subtree_len).sum::<usize>()
    }
}

impl SortableRow for Record {
    fn value(&self, value_path: &str) -> Option<&Value> {
        self.fields.get(value_path)
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nested_record() {
        let json = r#"{
            "fields": { "name": "Zoe", "age": 34 },
            "collapsed": true,
            "children": [{ "fields": { "name": "Liz", "age": 5 } }]
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("name"), Some(&Value::from("Zoe")));
        assert_eq!(record.get("age"), Some(&Value::Int(34)));
        assert!(record.is_collapsed());
        assert_eq!(record.children().len(), 1);
        assert_eq!(record.children()[0].get("name"), Some(&Value::from("Liz")));
        assert!(record.get("children").is_none());
    }

    #[test]
    fn test_structural_names_are_ordinary_fields() {
        let json = r#"{
            "fields": { "children": "many", "collapsed": 3 },
            "children": [{}]
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.get("children"), Some(&Value::from("many")));
        assert_eq!(record.get("collapsed"), Some(&Value::Int(3)));
        assert_eq!(record.children().len(), 1);
        assert!(!record.is_collapsed());

        let round_trip: Record =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(round_trip, record);
    }

    #[test]
    fn test_subtree_len() {
        let record = Record::new()
            .child(Record::new().child(Record::new()))
            .child(Record::new());
        assert_eq!(record.subtree_len(), 4);
    }
}
