// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the forest: node identifiers, labels, children, and paths.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;

/// Default nominal row height in logical pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 62.0;

/// Identifier for a node in a [`Forest`](crate::Forest) (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Root-to-node chain of sibling indices.
///
/// The length of a path is the node's depth: roots have a path of length 1.
pub type TreePath = SmallVec<[usize; 8]>;

/// Context handed to computed labels.
#[derive(Clone, Copy, Debug)]
pub struct LabelContext<'a> {
    /// The node being labeled.
    pub node: NodeId,
    /// Path of the node.
    pub path: &'a [usize],
    /// Position of the row among the visible rows.
    pub tree_index: usize,
}

/// Display text for a title or subtitle.
#[derive(Clone)]
pub enum Label {
    /// Static text.
    Text(String),
    /// Text computed at render time.
    Computed(Rc<dyn Fn(&LabelContext<'_>) -> String>),
}

impl Label {
    /// Produce the text for this label.
    pub fn resolve(&self, cx: &LabelContext<'_>) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Computed(f) => f(cx),
        }
    }

    /// Wrap a closure as a computed label.
    pub fn computed(f: impl Fn(&LabelContext<'_>) -> String + 'static) -> Self {
        Self::Computed(Rc::new(f))
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Children of a node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Children {
    /// No children at all.
    #[default]
    Leaf,
    /// Ordered, loaded children. May be empty.
    Loaded(Vec<NodeId>),
    /// Children exist but are produced by a deferred loader owned by the host.
    ///
    /// Lazy children count as "has children" for the expander but are never
    /// descended into.
    Lazy,
}

impl Children {
    /// Loaded child ids, or an empty slice for leaves and lazy children.
    pub fn loaded(&self) -> &[NodeId] {
        match self {
            Self::Loaded(ids) => ids,
            Self::Leaf | Self::Lazy => &[],
        }
    }

    /// Returns `true` if the node should offer an expander.
    ///
    /// An empty loaded sequence does not count.
    pub fn has_children(&self) -> bool {
        match self {
            Self::Leaf => false,
            Self::Loaded(ids) => !ids.is_empty(),
            Self::Lazy => true,
        }
    }
}

/// Domain data for one node of the hierarchy.
///
/// Geometry is not stored here; see [`GeometryTable`](crate::GeometryTable).
#[derive(Clone, Debug)]
pub struct TreeNode {
    /// Title text.
    pub title: Label,
    /// Optional subtitle text.
    pub subtitle: Option<Label>,
    /// Whether the node's children are shown. Flipped by the host.
    pub expanded: bool,
    /// Host hint that this node should not be dragged.
    pub drag_disabled: bool,
    /// Fixed nominal row height, distinct from the measured box height.
    pub height: f64,
    pub(crate) children: Children,
}

impl TreeNode {
    /// A collapsed leaf with the given title and the default row height.
    pub fn new(title: impl Into<Label>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            expanded: false,
            drag_disabled: false,
            height: DEFAULT_ROW_HEIGHT,
            children: Children::Leaf,
        }
    }

    /// Set the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<Label>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set the expanded flag.
    #[must_use]
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Set the nominal row height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Mark the node as not draggable.
    #[must_use]
    pub fn with_drag_disabled(mut self) -> Self {
        self.drag_disabled = true;
        self
    }

    /// Mark the children as lazily loaded by the host.
    #[must_use]
    pub fn with_lazy_children(mut self) -> Self {
        self.children = Children::Lazy;
        self
    }

    /// Give the node an explicitly empty children sequence.
    #[must_use]
    pub fn with_empty_children(mut self) -> Self {
        self.children = Children::Loaded(Vec::new());
        self
    }

    /// The node's children.
    pub fn children(&self) -> &Children {
        &self.children
    }
}
