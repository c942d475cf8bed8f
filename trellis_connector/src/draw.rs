// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface sizing and connector drawing.

use alloc::vec::Vec;

use kurbo::{CubicBez, Line, Point, Rect, Size};
use smallvec::SmallVec;

use crate::scene::{ConnectorScene, ConnectorStyle, Segment};

/// What the renderer knows about one child when drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildGeometry {
    /// The child's parent box as of its last propagation.
    pub parent_box: Option<Rect>,
    /// The child's own measured height, if it has been measured.
    pub measured_height: Option<f64>,
    /// The child's nominal row height.
    pub nominal_height: f64,
}

impl ChildGeometry {
    /// Measured height, or the nominal height while unmeasured.
    pub fn height(&self) -> f64 {
        self.measured_height.unwrap_or(self.nominal_height)
    }
}

/// Input for one draw of an expandable node's connector.
#[derive(Clone, Copy, Debug)]
pub struct ConnectorInput<'a> {
    /// Whether the node is expanded.
    pub expanded: bool,
    /// The node's own effective box.
    pub parent_box: Rect,
    /// Loaded children in order. Empty for lazily-loaded children.
    pub children: &'a [ChildGeometry],
}

impl ConnectorInput<'_> {
    /// Height the connector has to cover.
    ///
    /// Collapsed nodes cover their own box. Expanded nodes cover the nominal
    /// heights of their children, so the surface does not follow live
    /// measurements of rows that may not have rendered yet.
    pub fn full_height(&self) -> f64 {
        if self.expanded {
            self.children.iter().map(|c| c.nominal_height).sum()
        } else {
            self.parent_box.height()
        }
    }

    /// Surface rectangle relative to the row.
    pub fn surface(&self, style: &ConnectorStyle) -> Rect {
        let height = (self.full_height() - style.surface_padding).max(0.0);
        Rect::from_origin_size(
            Point::new(
                self.parent_box.width() + style.surface_inset.x,
                style.surface_inset.y,
            ),
            Size::new(style.surface_width, height),
        )
    }
}

/// Vertical anchor of each child's branch, in surface coordinates.
///
/// Starts at the bus height and, for child `i`, adds
/// `(h_j - bus_padding) + (h_i / 2 - branch_padding)` for every earlier
/// sibling `j`. Anchors never move upward as the index grows.
pub fn child_anchors(
    bus_y: f64,
    children: &[ChildGeometry],
    style: &ConnectorStyle,
) -> SmallVec<[f64; 8]> {
    let mut anchors = SmallVec::with_capacity(children.len());
    let mut floor = bus_y;
    for (i, child) in children.iter().enumerate() {
        let half = child.height() / 2.0 - style.branch_padding;
        let spread: f64 = children[..i]
            .iter()
            .map(|sibling| ((sibling.height() - style.bus_padding) + half).max(0.0))
            .sum();
        let y = (bus_y + spread).max(floor);
        floor = y;
        anchors.push(y);
    }
    anchors
}

/// Draw a connector.
///
/// Returns `None` while an expanded node's first child has no parent box
/// yet; the next tick will try again.
pub fn draw(input: &ConnectorInput<'_>, style: &ConnectorStyle) -> Option<ConnectorScene> {
    let surface = input.surface(style);
    let width = surface.width();
    let mid_x = width / 2.0;
    let mut segments = Vec::new();

    if !input.expanded {
        let y = surface.height() / 2.0;
        segments.push(Segment::Stub(Line::new((0.0, y), (mid_x, y))));
    } else if let Some(first) = input.children.first() {
        let Some(first_parent) = first.parent_box else {
            log::trace!("connector skipped: first child has no parent box yet");
            return None;
        };
        let bus_y = first_parent.height() / 2.0 - style.bus_padding;
        segments.push(Segment::Bus(Line::new((0.0, bus_y), (mid_x, bus_y))));

        let start = Point::new(mid_x, bus_y);
        for end_y in child_anchors(bus_y, input.children, style) {
            let end = Point::new(width, end_y);
            let control_x = start.x + (end.x - start.x) / 2.0;
            segments.push(Segment::Branch(CubicBez::new(
                start,
                Point::new(control_x, start.y),
                Point::new(control_x, end.y),
                end,
            )));
        }
    }

    Some(ConnectorScene {
        surface,
        stroke_width: style.stroke_width,
        segments,
    })
}
