//! Multi-column sort state and hierarchical row ordering for tables.
//!
//! The crate tracks which columns a table is sorted by (and in which order of
//! priority), turns header clicks into new sort states, and produces the
//! ordered, depth-annotated row sequence a renderer should draw.
//!
//! ```
//! use tabsort::{Column, HeaderClick, Record, SortEngine};
//!
//! let columns = vec![
//!     Column::new("name", "Name"),
//!     Column::new("age", "Age"),
//! ];
//! let rows = vec![
//!     Record::new().set("name", "Zoe").set("age", 34),
//!     Record::new().set("name", "Alex").set("age", 34),
//! ];
//!
//! let mut engine = SortEngine::new(columns).unwrap();
//! engine.click(&HeaderClick::new("name")).unwrap();
//!
//! let names: Vec<_> = engine
//!     .render(&rows)
//!     .iter()
//!     .map(|r| r.row.get("name").cloned())
//!     .collect();
//! assert_eq!(names, vec![Some("Zoe".into()), Some("Alex".into())]);
//! ```

pub mod column;
pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod flatten;
pub mod row;
pub mod sort;
pub mod value;

pub use column::{Column, Columns};
pub use compare::{Comparator, CompareOptions, ValueCompareFn, build_comparator};
pub use config::EngineConfig;
pub use engine::{
    ClickOutcome, ClickTarget, HeaderClick, SortEngine, SortListener, SubscriptionId,
};
pub use error::SortError;
pub use flatten::{RenderRow, flatten, flatten_visible};
pub use row::{Record, SortableRow};
pub use sort::{Direction, SortDescriptor, SortIndicator, SortState};
pub use value::Value;
