mod common;

use common::{engine, name_age, pairs, people};
use tabsort::{Direction, HeaderClick, SortDescriptor, SortIndicator};

#[test]
fn test_multi_select_builds_priority_list() {
    let mut engine = engine();

    engine.click(&HeaderClick::new("name").multi()).unwrap();
    assert_eq!(engine.state().descriptors(), [SortDescriptor::desc("name")]);

    engine.click(&HeaderClick::new("age").multi()).unwrap();
    assert_eq!(
        engine.state().descriptors(),
        [SortDescriptor::desc("name"), SortDescriptor::desc("age")]
    );

    // Flipping to ascending moves the column to the lowest priority.
    engine.click(&HeaderClick::new("name").multi()).unwrap();
    assert_eq!(
        engine.state().descriptors(),
        [SortDescriptor::desc("age"), SortDescriptor::asc("name")]
    );

    engine.click(&HeaderClick::new("name").multi()).unwrap();
    assert_eq!(engine.state().descriptors(), [SortDescriptor::desc("age")]);
}

#[test]
fn test_multi_column_row_orders() {
    let rows = people();
    let mut engine = engine();

    engine.click(&HeaderClick::new("name")).unwrap();
    assert_eq!(
        name_age(&engine.render(&rows)),
        pairs(&[("Zoe", 34), ("Zoe", 25), ("Zoe", 27), ("Alex", 34)])
    );

    engine.click(&HeaderClick::new("age").multi()).unwrap();
    assert_eq!(
        engine.state().descriptors(),
        [SortDescriptor::desc("name"), SortDescriptor::desc("age")]
    );
    assert_eq!(
        name_age(&engine.render(&rows)),
        pairs(&[("Zoe", 34), ("Zoe", 27), ("Zoe", 25), ("Alex", 34)])
    );

    engine.click(&HeaderClick::new("age").multi()).unwrap();
    assert_eq!(
        engine.state().descriptors(),
        [SortDescriptor::desc("name"), SortDescriptor::asc("age")]
    );
    assert_eq!(
        name_age(&engine.render(&rows)),
        pairs(&[("Zoe", 25), ("Zoe", 27), ("Zoe", 34), ("Alex", 34)])
    );

    // Reversing the initial column pushes it onto the end of the sorts.
    engine.click(&HeaderClick::new("name").multi()).unwrap();
    assert_eq!(
        engine.state().descriptors(),
        [SortDescriptor::asc("age"), SortDescriptor::asc("name")]
    );
    assert_eq!(engine.indicator("age").and_then(|i| i.priority), Some(1));
    assert_eq!(engine.indicator("name").and_then(|i| i.priority), Some(2));
    assert_eq!(
        name_age(&engine.render(&rows)),
        pairs(&[("Zoe", 25), ("Zoe", 27), ("Alex", 34), ("Zoe", 34)])
    );

    // Removing age leaves name ascending alone; ties keep input order.
    engine.click(&HeaderClick::new("age").multi()).unwrap();
    assert_eq!(engine.state().descriptors(), [SortDescriptor::asc("name")]);
    assert_eq!(
        engine.indicator("name"),
        Some(SortIndicator {
            direction: Direction::Ascending,
            priority: None,
        })
    );
    assert_eq!(
        name_age(&engine.render(&rows)),
        pairs(&[("Alex", 34), ("Zoe", 34), ("Zoe", 25), ("Zoe", 27)])
    );
}

#[test]
fn test_plain_click_collapses_multi_sort() {
    let mut engine = engine();
    engine.click(&HeaderClick::new("name").multi()).unwrap();
    engine.click(&HeaderClick::new("age").multi()).unwrap();

    engine.click(&HeaderClick::new("age")).unwrap();
    assert_eq!(engine.state().descriptors(), [SortDescriptor::desc("age")]);
}

#[test]
fn test_indicators_show_priority_for_multiple_keys() {
    let mut engine = engine();
    engine.click(&HeaderClick::new("name")).unwrap();
    assert_eq!(
        engine.indicator("name"),
        Some(SortIndicator {
            direction: Direction::Descending,
            priority: None,
        })
    );

    engine.click(&HeaderClick::new("age").multi()).unwrap();
    assert_eq!(engine.indicator("name").and_then(|i| i.priority), Some(1));
    assert_eq!(engine.indicator("age").and_then(|i| i.priority), Some(2));
    assert_eq!(engine.indicator("notes"), None);
}
