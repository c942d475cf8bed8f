// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Tree: node arena, geometry overlay, and placement for themed tree widgets.
//!
//! This crate holds the parts of a tree theme that do not depend on any
//! renderer:
//!
//! - [`Forest`]: an ordered forest of [`TreeNode`]s in a generational arena,
//!   addressed by [`NodeId`] or by [`TreePath`] (root-to-node sibling indices).
//! - [`GeometryTable`]: a side table of [`NodeGeometry`] keyed by [`NodeId`]. The
//!   domain nodes never carry geometry; the table is an optional derived overlay.
//! - [`GeometryTable::propagate`]: the top-down pass that turns measured boxes
//!   into effective boxes and hands each one to the node's children as their
//!   parent box.
//! - [`resolve_position`]: the per-depth placement of a row given its parent box.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_tree::{Forest, GeometryTable, Placement, PositionOffsets, TreeNode, resolve_position};
//!
//! let mut forest = Forest::new();
//! let a = forest.insert(None, TreeNode::new("A").with_expanded(true));
//! let b = forest.insert(Some(a), TreeNode::new("B"));
//!
//! let mut geometry = GeometryTable::new();
//! geometry.mount(a, 62.0);
//! geometry.mount(b, 62.0);
//! geometry.set_measured(a, Rect::new(0.0, 0.0, 120.0, 60.0));
//! geometry.propagate(&forest);
//!
//! let parent = geometry.get(b).unwrap().parent_bounding_box;
//! let placement = resolve_position(2, parent, 44.0, &PositionOffsets::default());
//! assert_eq!(placement, Placement::Absolute(Point::new(106.0, -60.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod forest;
mod geometry;
mod position;
mod types;

pub use forest::{Forest, VisibleRow};
pub use geometry::{GeometryTable, NodeGeometry, Propagation};
pub use position::{Placement, PositionOffsets, resolve_position};
pub use types::{Children, DEFAULT_ROW_HEIGHT, Label, LabelContext, NodeId, TreeNode, TreePath};
