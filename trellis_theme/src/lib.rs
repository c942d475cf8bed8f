// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Theme: a headless theme for sortable tree widgets.
//!
//! The host widget owns the [`Forest`](trellis_tree::Forest), renders rows,
//! and supplies a clock. The theme turns that into placement, expanders,
//! and connector drawings:
//!
//! - [`ThemeRenderer::render_row`] validates a row, mounts it on first use, and
//!   returns a [`RowView`]: placement relative to the parent row, an optional
//!   [`ExpanderView`], and [`RowContent`] passed through the host's
//!   [`DndAdapters`].
//! - [`ThemeRenderer::tick`] runs the due timers. Geometry timers read each row
//!   through [`RowProbes`] and propagate boxes from parents to children;
//!   connector timers redraw the lines between an expander and its children.
//! - [`RowExtents`] and [`ThemeRenderer::row_height`] feed the host's
//!   virtualized list.
//!
//! Configuration lives in [`ThemeConfig`]; every field has a default.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use trellis_theme::{NoDnd, RowProbes, RowProps, ThemeConfig, ThemeRenderer};
//! use trellis_tree::{Forest, NodeId, Placement, TreeNode};
//!
//! struct Fixed(NodeId);
//!
//! impl RowProbes for Fixed {
//!     fn container(&self, _: NodeId) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, 300.0, 62.0))
//!     }
//!     fn content(&self, node: NodeId) -> Option<Rect> {
//!         (node == self.0).then(|| Rect::new(0.0, 0.0, 120.0, 60.0))
//!     }
//! }
//!
//! let mut forest = Forest::new();
//! let root = forest.insert(None, TreeNode::new("Root").with_expanded(true));
//! let leaf = forest.insert(Some(root), TreeNode::new("Leaf"));
//!
//! let mut theme = ThemeRenderer::new(ThemeConfig::default());
//! for (i, id) in [root, leaf].into_iter().enumerate() {
//!     let props = RowProps::new(id, forest.path_of(id).unwrap(), i);
//!     theme.render_row(&forest, &props, &mut NoDnd).unwrap();
//! }
//! theme.tick(&forest, 10, &Fixed(root));
//!
//! let props = RowProps::new(leaf, forest.path_of(leaf).unwrap(), 1);
//! let view = theme.render_row(&forest, &props, &mut NoDnd).unwrap();
//! assert_eq!(view.placement, Placement::Absolute(Point::new(106.0, -60.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod expander;
mod extents;
mod renderer;
mod row;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use expander::{ExpanderView, ToggleChildren, ToggleRequest};
pub use extents::RowExtents;
pub use renderer::{RowProbes, ThemeRenderer, TickReport};
pub use row::{ButtonId, DndAdapters, DropEffect, NoDnd, RowClasses, RowContent, RowProps, RowView};
