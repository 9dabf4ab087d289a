//! The sort engine: columns, current sort state and change listeners.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::column::{Column, Columns};
use crate::compare::{Comparator, CompareOptions, ValueCompareFn};
use crate::config::EngineConfig;
use crate::error::SortError;
use crate::flatten::{RenderRow, flatten, flatten_visible};
use crate::row::SortableRow;
use crate::sort::{SortDescriptor, SortIndicator, SortState};

/// Receives the new descriptor list whenever a click changes the sort state.
pub trait SortListener: Send {
    /// Called once per sorting click, after the state was replaced.
    fn on_update_sorts(&mut self, sorts: &[SortDescriptor]);
}

impl<F> SortListener for F
where
    F: FnMut(&[SortDescriptor]) + Send,
{
    fn on_update_sorts(&mut self, sorts: &[SortDescriptor]) {
        self(sorts)
    }
}

/// Handle returned by [`SortEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

impl SubscriptionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__sort_listener_{}", self.0)
    }
}

/// Which part of a column header was clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClickTarget {
    /// The header body; sorts the column.
    #[default]
    Header,
    /// The resize handle; never sorts.
    ResizeHandle,
}

/// A click on a column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderClick {
    /// Value path of the clicked column.
    pub column: String,
    /// Whether the multi-select modifier was held.
    pub multi: bool,
    /// Where on the header the click landed.
    pub target: ClickTarget,
}

impl HeaderClick {
    /// A plain click on a header.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            multi: false,
            target: ClickTarget::Header,
        }
    }

    /// A click on a header's resize handle.
    pub fn resize_handle(column: impl Into<String>) -> Self {
        Self {
            target: ClickTarget::ResizeHandle,
            ..Self::new(column)
        }
    }

    /// Mark the click as a multi-select gesture.
    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }
}

/// Result of [`SortEngine::click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click did not affect sorting.
    Ignored,
    /// The sort state was replaced with this one.
    Sorted(SortState),
}

/// Owns a table's sort state and turns header clicks into row orderings.
///
/// The engine holds plain data: hosts feed it clicks, read back the
/// [`SortState`] and the flattened rows, and subscribe to be told when the
/// sorts change.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use tabsort::{Column, HeaderClick, SortDescriptor, SortEngine};
///
/// let mut engine = SortEngine::new(vec![Column::new("age", "Age")]).unwrap();
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// engine.subscribe(move |sorts: &[SortDescriptor]| {
///     sink.lock().unwrap().push(sorts.to_vec());
/// });
///
/// engine.click(&HeaderClick::new("age")).unwrap();
/// assert_eq!(seen.lock().unwrap()[0], vec![SortDescriptor::desc("age")]);
/// ```
pub struct SortEngine {
    columns: Columns,
    state: SortState,
    options: CompareOptions,
    listeners: Vec<(SubscriptionId, Box<dyn SortListener>)>,
}

impl fmt::Debug for SortEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortEngine")
            .field("columns", &self.columns)
            .field("state", &self.state)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SortEngine {
    /// Create an unsorted engine over the given columns.
    pub fn new(columns: Vec<Column>) -> Result<Self, SortError> {
        Self::with_config(columns, EngineConfig::default())
    }

    /// Create an engine from a configuration.
    ///
    /// Fails if the columns repeat a value path, or the initial sorts
    /// reference an unknown, unsortable or repeated column.
    pub fn with_config(columns: Vec<Column>, config: EngineConfig) -> Result<Self, SortError> {
        let columns = Columns::new(columns)?;
        let state = Self::validate(&columns, config.initial_sorts)?;
        Ok(Self {
            columns,
            state,
            options: CompareOptions::new().sort_empty_last(config.sort_empty_last),
            listeners: Vec::new(),
        })
    }

    /// Replace natural value ordering with a custom comparison.
    pub fn with_compare(mut self, compare: ValueCompareFn) -> Self {
        self.options.compare = Some(compare);
        self
    }

    fn validate(columns: &Columns, sorts: Vec<SortDescriptor>) -> Result<SortState, SortError> {
        for descriptor in &sorts {
            columns.sortable(&descriptor.value_path)?;
        }
        SortState::from_descriptors(sorts)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The configured columns.
    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// The current sort state.
    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// The current compare options.
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Header indicator for a column, if it is sorted.
    pub fn indicator(&self, column: &str) -> Option<SortIndicator> {
        self.state.indicator(column)
    }

    /// Whether a column exposes a resize handle.
    pub fn is_resizable(&self, column: &str) -> bool {
        self.columns.get(column).is_some_and(|c| c.resizable)
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Handle a header click.
    ///
    /// Clicks on a resize handle are ignored. Sorting clicks replace the state
    /// and notify every listener exactly once, even when the new state is
    /// empty.
    pub fn click(&mut self, click: &HeaderClick) -> Result<ClickOutcome, SortError> {
        if self.columns.get(&click.column).is_none() {
            log::warn!("[sort] click on unknown column {}", click.column);
            return Err(SortError::UnknownColumn(click.column.clone()));
        }

        if click.target == ClickTarget::ResizeHandle {
            log::trace!("[sort] resize handle click on {} ignored", click.column);
            return Ok(ClickOutcome::Ignored);
        }

        if let Err(e) = self.columns.sortable(&click.column) {
            log::warn!("[sort] rejected click: {e}");
            return Err(e);
        }

        let next = self.state.apply_click(&click.column, click.multi);
        log::debug!(
            "[sort] {} click on {}: {:?}",
            if click.multi { "multi" } else { "plain" },
            click.column,
            next.descriptors()
        );
        self.state = next.clone();
        self.notify();
        Ok(ClickOutcome::Sorted(next))
    }

    /// Replace the sort state directly, without notifying listeners.
    pub fn set_sorts(&mut self, sorts: Vec<SortDescriptor>) -> Result<(), SortError> {
        self.state = Self::validate(&self.columns, sorts)?;
        log::debug!("[sort] sorts set to {:?}", self.state.descriptors());
        Ok(())
    }

    /// Comparator for the current state.
    pub fn comparator(&self) -> Comparator {
        Comparator::new(self.state.clone(), self.options.clone())
    }

    /// All rows, sorted and flattened for rendering.
    pub fn render<'a, R: SortableRow>(&self, rows: &'a [R]) -> Vec<RenderRow<'a, R>> {
        flatten(rows, &self.comparator())
    }

    /// Rows outside collapsed subtrees, sorted and flattened for rendering.
    pub fn render_visible<'a, R: SortableRow>(&self, rows: &'a [R]) -> Vec<RenderRow<'a, R>> {
        flatten_visible(rows, &self.comparator())
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register a listener for sort changes.
    pub fn subscribe(&mut self, listener: impl SortListener + 'static) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let sorts = self.state.descriptors();
        for (_, listener) in &mut self.listeners {
            listener.on_update_sorts(sorts);
        }
    }
}
