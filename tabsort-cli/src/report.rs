//! Table loading and click replay.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use tabsort::{
    ClickOutcome, Column, EngineConfig, HeaderClick, Record, SortDescriptor, SortEngine,
    SortError, Value,
};

use crate::error::CliError;

/// A table file: column definitions plus the row tree.
#[derive(Debug, Clone, Deserialize)]
pub struct TableFile {
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Record>,
}

impl TableFile {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What gets printed after all clicks were replayed.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub sorts: Vec<SortDescriptor>,
    pub notifications: usize,
    pub ignored: usize,
    pub rows: Vec<ReportRow<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ReportRow<'a> {
    pub depth: usize,
    pub parent: Option<usize>,
    pub fields: BTreeMap<&'a str, &'a Value>,
}

/// Replay clicks on a fresh engine and collect the result.
pub fn replay<'a>(
    table: &'a TableFile,
    config: EngineConfig,
    clicks: &[HeaderClick],
    visible_only: bool,
) -> Result<Report<'a>, SortError> {
    let mut engine = SortEngine::with_config(table.columns.clone(), config)?;

    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notifications);
    engine.subscribe(move |sorts: &[SortDescriptor]| {
        log::info!("sorts updated: {:?}", sorts);
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let mut ignored = 0;
    for click in clicks {
        if engine.click(click)? == ClickOutcome::Ignored {
            ignored += 1;
        }
    }

    let rendered = if visible_only {
        engine.render_visible(&table.rows)
    } else {
        engine.render(&table.rows)
    };

    let rows = rendered
        .iter()
        .map(|r| ReportRow {
            depth: r.depth,
            parent: r.parent,
            fields: r
                .row
                .fields()
                .iter()
                .map(|(k, v)| (k.as_str(), v))
                .collect(),
        })
        .collect();

    Ok(Report {
        sorts: engine.state().descriptors().to_vec(),
        notifications: notifications.load(Ordering::Relaxed),
        ignored,
        rows,
    })
}

/// Number of rows in a table, including nested ones.
pub fn row_count(rows: &[Record]) -> usize {
    rows.iter().map(Record::subtree_len).sum()
}
