// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use trellis_tree::{NodeId, TreePath};

/// A row was rendered with inputs that do not describe a node.
///
/// Unmounted elements and stale geometry are not errors; they converge on a
/// later tick.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// The row's path has no entries.
    #[error("row path is empty")]
    EmptyPath,
    /// The row's node is not in the forest.
    #[error("node {0:?} is not in the forest")]
    StaleNode(NodeId),
    /// The row's path leads somewhere else.
    #[error("path {path:?} does not lead to node {node:?}")]
    PathMismatch {
        /// Node passed with the row.
        node: NodeId,
        /// Path passed with the row.
        path: TreePath,
    },
}
