#![allow(dead_code)]

use tabsort::{Column, Record, RenderRow, SortEngine, Value};

pub fn person(name: &str, age: i64) -> Record {
    Record::new().set("name", name).set("age", age)
}

/// The four-person fixture used by the sorting scenarios.
pub fn people() -> Vec<Record> {
    vec![
        person("Zoe", 34),
        person("Alex", 34),
        person("Zoe", 25),
        person("Zoe", 27),
    ]
}

pub fn engine() -> SortEngine {
    SortEngine::new(vec![
        Column::new("name", "Name"),
        Column::new("age", "Age").resizable(false),
        Column::new("notes", "Notes").sortable(false),
    ])
    .unwrap()
}

fn text(value: Option<&Value>) -> String {
    value.map(Value::to_string).unwrap_or_default()
}

pub fn name_age(rows: &[RenderRow<'_, Record>]) -> Vec<(String, i64)> {
    rows.iter()
        .map(|r| {
            let age = match r.row.get("age") {
                Some(Value::Int(age)) => *age,
                _ => -1,
            };
            (text(r.row.get("name")), age)
        })
        .collect()
}

pub fn names(rows: &[RenderRow<'_, Record>]) -> Vec<String> {
    rows.iter().map(|r| text(r.row.get("name"))).collect()
}

pub fn pairs(expected: &[(&str, i64)]) -> Vec<(String, i64)> {
    expected
        .iter()
        .map(|(name, age)| (name.to_string(), *age))
        .collect()
}
