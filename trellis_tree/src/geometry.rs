// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry side table and bounding-box propagation.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::forest::Forest;
use crate::types::NodeId;

/// Per-node geometry overlay, keyed by [`NodeId`] in a [`GeometryTable`].
///
/// Rectangles use `x0`/`y0` as `left`/`top`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeGeometry {
    /// Last rectangle published by the measurer.
    pub measured: Option<Rect>,
    /// Effective box after propagation: `measured`, with its left edge moved
    /// to the right edge of `parent_bounding_box` when there is one.
    pub bounding_box: Option<Rect>,
    /// The parent's effective box as of the last propagation pass.
    pub parent_bounding_box: Option<Rect>,
    /// Nominal row height recorded at the node's last render.
    pub row_height: f64,
}

/// Summary of a [`GeometryTable::propagate`] pass.
#[derive(Clone, Debug, Default)]
pub struct Propagation {
    /// Nodes whose effective box or parent box changed, parents before children.
    pub changed: Vec<NodeId>,
}

impl Propagation {
    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }
}

/// Geometry for mounted nodes, kept apart from the domain [`Forest`].
///
/// Entries are created by [`mount`](Self::mount), overwritten by measurement
/// and propagation, and dropped by [`unmount`](Self::unmount).
#[derive(Clone, Debug, Default)]
pub struct GeometryTable {
    entries: HashMap<NodeId, NodeGeometry>,
}

impl GeometryTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the geometry entry for a node. Existing entries are kept.
    pub fn mount(&mut self, id: NodeId, row_height: f64) -> &mut NodeGeometry {
        self.entries.entry(id).or_insert_with(|| NodeGeometry {
            row_height,
            ..NodeGeometry::default()
        })
    }

    /// Discard the geometry of a node. Returns `false` if it was not mounted.
    pub fn unmount(&mut self, id: NodeId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// Returns `true` if the node has a geometry entry.
    pub fn is_mounted(&self, id: NodeId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Geometry of a mounted node.
    pub fn get(&self, id: NodeId) -> Option<&NodeGeometry> {
        self.entries.get(&id)
    }

    /// Mutable geometry of a mounted node.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeGeometry> {
        self.entries.get_mut(&id)
    }

    /// Number of mounted nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no node is mounted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a freshly measured rectangle. Returns `false` for unmounted nodes.
    pub fn set_measured(&mut self, id: NodeId, rect: Rect) -> bool {
        match self.entries.get_mut(&id) {
            Some(g) => {
                g.measured = Some(rect);
                true
            }
            None => false,
        }
    }

    /// Recompute effective boxes top-down and hand each one to the node's
    /// direct children as their parent box.
    ///
    /// A parent is always visited before its children, so a child's parent
    /// box is the parent's box from this same pass. Nodes without a
    /// measurement keep their previous effective box. Nodes without an entry
    /// are walked through: their children inherit nothing and keep their last
    /// parent box. Repeating the pass on unchanged input changes nothing.
    pub fn propagate(&mut self, forest: &Forest) -> Propagation {
        let mut out = Propagation::default();
        let mut stack: Vec<(NodeId, Option<Rect>)> =
            forest.roots().iter().rev().map(|&r| (r, None)).collect();

        while let Some((id, inherited)) = stack.pop() {
            let Some(g) = self.entries.get_mut(&id) else {
                for &child in forest.children_of(id).iter().rev() {
                    stack.push((child, None));
                }
                continue;
            };
            let before = *g;
            if let Some(parent) = inherited {
                g.parent_bounding_box = Some(parent);
            } else if forest.parent_of(id).is_none() {
                g.parent_bounding_box = None;
            }
            if let Some(measured) = g.measured {
                g.bounding_box = Some(match g.parent_bounding_box {
                    Some(parent) => measured.with_origin(Point::new(parent.x1, measured.y0)),
                    None => measured,
                });
            }
            if before != *g {
                out.changed.push(id);
            }

            let own = g.bounding_box;
            for &child in forest.children_of(id).iter().rev() {
                stack.push((child, own));
            }
        }

        if !out.is_empty() {
            log::debug!("propagated geometry to {} nodes", out.changed.len());
        }
        out
    }
}
