// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row render inputs and outputs.

use alloc::string::String;
use alloc::vec::Vec;

use trellis_tree::{Label, NodeId, Placement, TreePath};

use crate::expander::ExpanderView;

bitflags::bitflags! {
    /// Visual states of a row, mapped to style classes by the host.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RowClasses: u8 {
        /// A drag is in progress over this row.
        const LANDING_PAD     = 0b0000_0001;
        /// The landing pad does not accept the drop.
        const CANCEL_PAD      = 0b0000_0010;
        /// The node matches the current search.
        const SEARCH_MATCH    = 0b0000_0100;
        /// The node is the focused search match.
        const SEARCH_FOCUS    = 0b0000_1000;
        /// The row cannot be dragged.
        const DRAG_DISABLED   = 0b0001_0000;
    }
}

/// Handle of a host toolbar button.
///
/// The theme never looks inside; it only carries the handles to the row's
/// toolbar in the order the host supplied them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ButtonId(pub u32);

/// What the host passes in for every visible row.
#[derive(Clone, Debug)]
pub struct RowProps {
    /// Node on this row.
    pub node: NodeId,
    /// Path of the node.
    pub path: TreePath,
    /// Position among the visible rows.
    pub tree_index: usize,
    /// Whether the host supplied a toggle callback; without one no expander is shown.
    pub can_toggle: bool,
    /// A drag is in progress.
    pub is_dragging: bool,
    /// The row may be dragged.
    pub can_drag: bool,
    /// The row accepts the current drop.
    pub can_drop: bool,
    /// The last drag ended in a drop.
    pub did_drop: bool,
    /// Node being dragged, if any.
    pub dragged_node: Option<NodeId>,
    /// The node matches the current search.
    pub is_search_match: bool,
    /// The node is the focused search match.
    pub is_search_focus: bool,
    /// Title overriding the node's own.
    pub title: Option<Label>,
    /// Subtitle overriding the node's own.
    pub subtitle: Option<Label>,
    /// Extra class name appended by the host.
    pub class_name: Option<String>,
    /// Toolbar buttons to show on the row.
    pub buttons: Vec<ButtonId>,
}

impl RowProps {
    /// Props for a row with no drag or search state.
    pub fn new(node: NodeId, path: TreePath, tree_index: usize) -> Self {
        Self {
            node,
            path,
            tree_index,
            can_toggle: true,
            is_dragging: false,
            can_drag: false,
            can_drop: false,
            did_drop: false,
            dragged_node: None,
            is_search_match: false,
            is_search_focus: false,
            title: None,
            subtitle: None,
            class_name: None,
            buttons: Vec::new(),
        }
    }
}

/// Drop effect requested from the drag source adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropEffect {
    /// Dropping copies the node.
    Copy,
    /// Dropping moves the node.
    Move,
}

/// The draggable part of a row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowContent {
    /// Resolved title text.
    pub title: String,
    /// Resolved subtitle text.
    pub subtitle: Option<String>,
    /// Style states.
    pub classes: RowClasses,
    /// Host class name, passed through.
    pub class_name: Option<String>,
    /// Toolbar buttons, passed through in order.
    pub buttons: Vec<ButtonId>,
    /// 0.5 while the row is inside the dragged subtree, otherwise 1.0.
    pub opacity: f64,
}

/// Drag-and-drop hooks owned by the host widget.
///
/// The theme calls them on every row and never alters what they return.
pub trait DndAdapters {
    /// Register `content` as a drag preview.
    fn connect_drag_preview(&mut self, content: RowContent) -> RowContent;
    /// Register `content` as a drag source.
    fn connect_drag_source(&mut self, content: RowContent, effect: DropEffect) -> RowContent;
}

/// Adapters for hosts without drag and drop.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDnd;

impl DndAdapters for NoDnd {
    fn connect_drag_preview(&mut self, content: RowContent) -> RowContent {
        content
    }

    fn connect_drag_source(&mut self, content: RowContent, _effect: DropEffect) -> RowContent {
        content
    }
}

/// Everything the host needs to lay out and paint one row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    /// Node on this row.
    pub node: NodeId,
    /// Flow or absolute placement of the row container.
    pub placement: Placement,
    /// Expander, when the node has children and its row has been measured.
    pub expander: Option<ExpanderView>,
    /// Row content after the drag adapters.
    pub content: RowContent,
}
