mod common;

use common::{engine, names};
use tabsort::{HeaderClick, Record};

const NAMES: [&str; 3] = ["Liz", "Zoe", "Alex"];

/// Three roots, each with three children named like the roots.
fn family() -> Vec<Record> {
    NAMES
        .iter()
        .map(|root| {
            let children = NAMES
                .iter()
                .map(|child| Record::new().set("name", *child).set("parent", *root))
                .collect();
            Record::new().set("name", *root).with_children(children)
        })
        .collect()
}

#[test]
fn test_tree_sorts_each_level_independently() {
    let rows = family();
    let mut engine = engine();
    engine.click(&HeaderClick::new("name")).unwrap();

    let rendered = engine.render(&rows);
    assert_eq!(rendered.len(), 12);
    assert_eq!(
        names(&rendered),
        [
            "Zoe", "Zoe", "Liz", "Alex", //
            "Liz", "Zoe", "Liz", "Alex", //
            "Alex", "Zoe", "Liz", "Alex",
        ]
    );

    let depths: Vec<_> = rendered.iter().map(|r| r.depth).collect();
    assert_eq!(depths, [0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1]);

    // Children stay under their own parent.
    for row in rendered.iter().filter(|r| r.depth == 1) {
        let parent = rendered[row.parent.unwrap()].row;
        assert_eq!(row.row.get("parent"), parent.get("name"));
    }
}

#[test]
fn test_full_cycle_restores_nested_order() {
    let rows = family();
    let mut engine = engine();
    let original = names(&engine.render(&rows));

    engine.click(&HeaderClick::new("name")).unwrap();
    engine.click(&HeaderClick::new("name")).unwrap();
    assert_eq!(
        names(&engine.render(&rows))[..4],
        ["Alex", "Alex", "Liz", "Zoe"]
    );

    engine.click(&HeaderClick::new("name")).unwrap();
    assert!(engine.state().is_empty());
    assert_eq!(names(&engine.render(&rows)), original);
}

#[test]
fn test_render_visible_hides_collapsed_subtrees() {
    let mut rows = family();
    rows[1].set_collapsed(true);
    let mut engine = engine();
    engine.click(&HeaderClick::new("name")).unwrap();

    let visible = engine.render_visible(&rows);
    assert_eq!(
        names(&visible),
        ["Zoe", "Liz", "Zoe", "Liz", "Alex", "Alex", "Zoe", "Liz", "Alex"]
    );
    assert_eq!(visible[0].depth, 0);
    assert!(visible[0].has_children);
    assert_eq!(visible[1].depth, 0);
}
