// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connector style and the display list produced by a draw.

use alloc::vec::Vec;

use kurbo::{BezPath, CubicBez, Line, Rect, Shape, Vec2};

/// Sizes and paddings for connector surfaces.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConnectorStyle {
    /// Width of the drawing surface.
    pub surface_width: f64,
    /// Taken off the full height to get the surface height.
    pub surface_padding: f64,
    /// Taken off the bus line height and each sibling's contribution.
    pub bus_padding: f64,
    /// Taken off each half child height when spreading branches.
    pub branch_padding: f64,
    /// Line width used for every segment.
    pub stroke_width: f64,
    /// Offset of the surface from the parent box's right edge and top.
    pub surface_inset: Vec2,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            surface_width: 100.0,
            surface_padding: 20.0,
            bus_padding: 10.0,
            branch_padding: 20.0,
            stroke_width: 2.0,
            surface_inset: Vec2::new(-10.0, 10.0),
        }
    }
}

/// One stroked piece of a connector, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Collapsed marker from the left edge to the horizontal middle.
    Stub(Line),
    /// Trunk every branch starts from.
    Bus(Line),
    /// S-curve from the bus end to one child's anchor.
    Branch(CubicBez),
}

impl Segment {
    /// Path to stroke for this segment.
    ///
    /// Branches end with a straight segment onto their own endpoint, which
    /// keeps the join visible when the curve flattens out.
    pub fn to_path(&self) -> BezPath {
        match *self {
            Self::Stub(line) | Self::Bus(line) => line.to_path(0.1),
            Self::Branch(curve) => {
                let mut path = BezPath::new();
                path.move_to(curve.p0);
                path.curve_to(curve.p1, curve.p2, curve.p3);
                path.line_to(curve.p3);
                path
            }
        }
    }
}

/// A full redraw of one connector surface.
///
/// Scenes are replaced wholesale on every draw; hosts should clear the
/// surface before stroking a new scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorScene {
    /// Surface rectangle relative to the row.
    pub surface: Rect,
    /// Line width for every segment.
    pub stroke_width: f64,
    /// Segments in drawing order.
    pub segments: Vec<Segment>,
}

impl ConnectorScene {
    /// Iterate over the branch curves.
    pub fn branches(&self) -> impl Iterator<Item = &CubicBez> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Branch(c) => Some(c),
            _ => None,
        })
    }

    /// The bus line, if the node is expanded.
    pub fn bus(&self) -> Option<Line> {
        self.segments.iter().find_map(|s| match s {
            Segment::Bus(l) => Some(*l),
            _ => None,
        })
    }

    /// The stub line, if the node is collapsed.
    pub fn stub(&self) -> Option<Line> {
        self.segments.iter().find_map(|s| match s {
            Segment::Stub(l) => Some(*l),
            _ => None,
        })
    }
}
