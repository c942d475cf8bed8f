// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical extents of the visible rows, for virtualized host lists.

use alloc::vec::Vec;

use trellis_tree::{Forest, VisibleRow};

/// Prefix sums over the heights of the visible rows, in tree-index order.
///
/// Built from [`Forest::visible_rows`] and a row-height query such as
/// [`ThemeRenderer::row_height`](crate::ThemeRenderer::row_height). Rebuild
/// after expanding, collapsing, or re-rendering rows.
#[derive(Clone, Debug, Default)]
pub struct RowExtents {
    rows: Vec<VisibleRow>,
    extents: Vec<f64>,
    prefix_starts: Vec<f64>,
}

impl RowExtents {
    /// Collect the visible rows of `forest` and size each with `height`.
    ///
    /// Negative heights are clamped to zero.
    pub fn build(forest: &Forest, height: impl Fn(&VisibleRow) -> f64) -> Self {
        let rows = forest.visible_rows();
        let extents: Vec<f64> = rows.iter().map(|r| height(r).max(0.0)).collect();
        let mut prefix_starts = Vec::with_capacity(extents.len());
        let mut pos = 0.0;
        for &extent in &extents {
            prefix_starts.push(pos);
            pos += extent;
        }
        Self {
            rows,
            extents,
            prefix_starts,
        }
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The visible rows.
    pub fn rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    /// Height of the row at `tree_index`, or zero when out of range.
    pub fn extent_of(&self, tree_index: usize) -> f64 {
        self.extents.get(tree_index).copied().unwrap_or(0.0)
    }

    /// Offset of the row at `tree_index` from the top; clamped to the last row.
    pub fn offset_of(&self, tree_index: usize) -> f64 {
        if self.prefix_starts.is_empty() {
            return 0.0;
        }
        let i = tree_index.min(self.prefix_starts.len() - 1);
        self.prefix_starts[i]
    }

    /// Sum of all row heights.
    pub fn total_extent(&self) -> f64 {
        match (self.prefix_starts.last(), self.extents.last()) {
            (Some(start), Some(extent)) => start + extent,
            _ => 0.0,
        }
    }

    /// Row containing `offset`, clamped into `0..len`.
    pub fn index_at_offset(&self, offset: f64) -> usize {
        if self.prefix_starts.is_empty() {
            return 0;
        }
        let target = offset.max(0.0);
        match self
            .prefix_starts
            .binary_search_by(|pos| pos.partial_cmp(&target).unwrap_or(core::cmp::Ordering::Equal))
        {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_tree::TreeNode;

    #[test]
    fn offsets_follow_expansion() {
        let mut f = Forest::new();
        let a = f.insert(None, TreeNode::new("A").with_expanded(true));
        f.insert(Some(a), TreeNode::new("B").with_height(30.0));
        f.insert(Some(a), TreeNode::new("C").with_height(40.0));
        f.insert(None, TreeNode::new("D"));

        let height = |r: &VisibleRow| f.get(r.node).map_or(62.0, |n| n.height);
        let ext = RowExtents::build(&f, height);
        assert_eq!(ext.len(), 4);
        assert_eq!(ext.offset_of(2), 92.0);
        assert_eq!(ext.total_extent(), 62.0 + 30.0 + 40.0 + 62.0);
        assert_eq!(ext.index_at_offset(0.0), 0);
        assert_eq!(ext.index_at_offset(91.9), 1);
        assert_eq!(ext.index_at_offset(92.0), 2);
        assert_eq!(ext.index_at_offset(10_000.0), 3);
        assert_eq!(ext.offset_of(99), ext.offset_of(3));

        let mut f = f;
        f.toggle_expanded(a);
        let ext = RowExtents::build(&f, |r| f.get(r.node).map_or(62.0, |n| n.height));
        assert_eq!(ext.len(), 2);
        assert_eq!(ext.total_extent(), 124.0);
    }

    #[test]
    fn empty_forest_has_no_extent() {
        let ext = RowExtents::build(&Forest::new(), |_| 62.0);
        assert!(ext.is_empty());
        assert_eq!(ext.total_extent(), 0.0);
        assert_eq!(ext.index_at_offset(50.0), 0);
        assert_eq!(ext.extent_of(0), 0.0);
    }
}
