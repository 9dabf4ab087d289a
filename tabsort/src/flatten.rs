//! Sorting and flattening of row trees into render order.

use std::fmt;

use crate::compare::Comparator;
use crate::row::SortableRow;

/// A row in render order.
///
/// Produced by [`flatten`]: rows come out depth-first, each parent directly
/// before its (sorted) children.
pub struct RenderRow<'a, R> {
    /// The row itself.
    pub row: &'a R,
    /// Depth in the tree (0 = root).
    pub depth: usize,
    /// Index of the parent's entry in the same render sequence.
    pub parent: Option<usize>,
    /// Whether the row has children (visible or not).
    pub has_children: bool,
}

impl<R> Clone for RenderRow<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RenderRow<'_, R> {}

impl<R> PartialEq for RenderRow<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.row, other.row)
            && self.depth == other.depth
            && self.parent == other.parent
            && self.has_children == other.has_children
    }
}

impl<R> Eq for RenderRow<'_, R> {}

impl<R: fmt::Debug> fmt::Debug for RenderRow<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderRow")
            .field("row", self.row)
            .field("depth", &self.depth)
            .field("parent", &self.parent)
            .field("has_children", &self.has_children)
            .finish()
    }
}

/// Sorts every sibling group and flattens the whole tree.
///
/// Sorting is local: rows only move within their own sibling group, at every
/// level, and ties keep their input order. A tree of N rows always yields N
/// entries.
pub fn flatten<'a, R: SortableRow>(
    roots: &'a [R],
    comparator: &Comparator,
) -> Vec<RenderRow<'a, R>> {
    collect(roots, comparator, false)
}

/// Like [`flatten`], but skips the descendants of collapsed rows.
///
/// Collapsed rows themselves are still emitted.
pub fn flatten_visible<'a, R: SortableRow>(
    roots: &'a [R],
    comparator: &Comparator,
) -> Vec<RenderRow<'a, R>> {
    collect(roots, comparator, true)
}

type Pending<'a, R> = (&'a R, usize, Option<usize>);

fn collect<'a, R: SortableRow>(
    roots: &'a [R],
    comparator: &Comparator,
    skip_collapsed: bool,
) -> Vec<RenderRow<'a, R>> {
    let mut out = Vec::with_capacity(roots.len());
    let mut stack: Vec<Pending<'a, R>> = Vec::new();
    push_group(&mut stack, roots, comparator, 0, None);

    while let Some((row, depth, parent)) = stack.pop() {
        let index = out.len();
        let children = row.children();
        out.push(RenderRow {
            row,
            depth,
            parent,
            has_children: !children.is_empty(),
        });

        if skip_collapsed && row.is_collapsed() {
            continue;
        }
        push_group(&mut stack, children, comparator, depth + 1, Some(index));
    }

    log::trace!(
        "[flatten] {} rows by {:?}",
        out.len(),
        comparator.state().descriptors()
    );
    out
}

/// Sorts a sibling group and pushes it so the first row pops first.
fn push_group<'a, R: SortableRow>(
    stack: &mut Vec<Pending<'a, R>>,
    group: &'a [R],
    comparator: &Comparator,
    depth: usize,
    parent: Option<usize>,
) {
    let mut sorted: Vec<&R> = group.iter().collect();
    comparator.sort(&mut sorted);
    stack.extend(sorted.into_iter().rev().map(|row| (row, depth, parent)));
}
