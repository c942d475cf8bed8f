// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expand/collapse control and its connector surface.

use trellis_connector::ConnectorScene;
use trellis_tree::{Forest, NodeId, TreePath};

/// Arguments forwarded to the host when an expander is pressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleRequest {
    /// Node to toggle.
    pub node: NodeId,
    /// Its path.
    pub path: TreePath,
    /// Its position among the visible rows.
    pub tree_index: usize,
}

/// Host callback that flips a node's `expanded` flag.
pub trait ToggleChildren {
    /// Show or hide the children of `request.node`.
    fn toggle_children_visibility(&mut self, request: ToggleRequest);
}

impl<F: FnMut(ToggleRequest)> ToggleChildren for F {
    fn toggle_children_visibility(&mut self, request: ToggleRequest) {
        self(request);
    }
}

impl ToggleChildren for Forest {
    fn toggle_children_visibility(&mut self, request: ToggleRequest) {
        if self.toggle_expanded(request.node).is_none() {
            log::debug!("toggle ignored for stale node {:?}", request.node);
        }
    }
}

/// The expander shown next to a row whose node has children.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpanderView {
    /// Arguments for the toggle callback.
    pub request: ToggleRequest,
    /// Whether the node is currently expanded.
    pub expanded: bool,
    /// Offset of the button from the row's right edge.
    pub button_right: f64,
    /// Latest connector drawing, if one has been produced yet.
    pub scene: Option<ConnectorScene>,
    /// Width of the spacer shown under an expanded, non-dragged node.
    pub spacer_width: Option<f64>,
}

impl ExpanderView {
    /// Accessible label for the button.
    pub fn aria_label(&self) -> &'static str {
        if self.expanded { "Collapse" } else { "Expand" }
    }

    /// Forward a press to the host.
    pub fn press(&self, toggle: &mut (impl ToggleChildren + ?Sized)) {
        toggle.toggle_children_visibility(self.request.clone());
    }
}
