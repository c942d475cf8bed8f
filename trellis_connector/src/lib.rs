// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Connector: the lines between a parent's expander and its children.
//!
//! Each expandable row owns a connector surface placed just right of its box.
//! On every draw the surface is described from scratch as a [`ConnectorScene`]:
//!
//! - Collapsed: a single [`Segment::Stub`] from the left edge to the middle,
//!   at half the surface height.
//! - Expanded: a [`Segment::Bus`] at half the parent height (less
//!   [`ConnectorStyle::bus_padding`]), then one [`Segment::Branch`] per child,
//!   an S-shaped cubic from the end of the bus to the child's anchor on the
//!   right edge. See [`child_anchors`] for how anchors spread.
//!
//! The output is plain [`kurbo`] geometry. Painting it (color, canvas, GPU) is
//! up to the host.
//!
//! ```rust
//! use kurbo::Rect;
//! use trellis_connector::{ChildGeometry, ConnectorInput, ConnectorStyle, draw};
//!
//! let child = ChildGeometry {
//!     parent_box: Some(Rect::new(0.0, 0.0, 180.0, 62.0)),
//!     measured_height: Some(62.0),
//!     nominal_height: 62.0,
//! };
//! let input = ConnectorInput {
//!     expanded: true,
//!     parent_box: Rect::new(0.0, 0.0, 180.0, 62.0),
//!     children: &[child, child],
//! };
//! let scene = draw(&input, &ConnectorStyle::default()).unwrap();
//! assert_eq!(scene.branches().count(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod draw;
mod scene;

pub use draw::{ChildGeometry, ConnectorInput, child_anchors, draw};
pub use scene::{ConnectorScene, ConnectorStyle, Segment};
