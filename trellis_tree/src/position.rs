// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute row placement from depth and parent geometry.

use kurbo::{Point, Rect};

/// Where a row is laid out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Normal document flow, no absolute offset.
    Flow,
    /// Absolutely positioned at this offset.
    Absolute(Point),
}

impl Placement {
    /// The offset of this placement; [`Point::ZERO`] for flow.
    pub fn offset(self) -> Point {
        match self {
            Self::Flow => Point::ZERO,
            Self::Absolute(p) => p,
        }
    }
}

/// Per-depth corrections applied by [`resolve_position`].
///
/// Every depth level is drawn as an overlapping absolutely-positioned layer;
/// these values undo the stacking so a node sits beside its parent's expander.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PositionOffsets {
    /// Pulled off `x` at depth 2 to account for the connector stub.
    pub stub_compensation: f64,
    /// Fraction of the scaffold width added per level beyond depth 2.
    pub scaffold_factor: f64,
}

impl Default for PositionOffsets {
    fn default() -> Self {
        Self {
            stub_compensation: 14.0,
            scaffold_factor: 0.5,
        }
    }
}

/// Compute where a node at `depth` (its path length) is placed.
///
/// - Roots (`depth <= 1`) always flow.
/// - Without a parent box the node flows too; geometry converges on a later tick.
/// - Otherwise `x = parent.left + parent.width`, minus `stub_compensation` at
///   depth 2, plus `(depth - 1) * scaffold_width * scaffold_factor` deeper down;
///   `y = -parent.height * (depth - 1)`, or `0` for a zero-height parent.
pub fn resolve_position(
    depth: usize,
    parent_box: Option<Rect>,
    scaffold_width: f64,
    offsets: &PositionOffsets,
) -> Placement {
    let Some(parent) = parent_box.filter(|_| depth > 1) else {
        return Placement::Flow;
    };
    let levels = (depth - 1) as f64;
    let mut x = parent.x0 + parent.width();
    if depth == 2 {
        x -= offsets.stub_compensation;
    } else {
        x += levels * scaffold_width * offsets.scaffold_factor;
    }
    let height = parent.height();
    let y = if height != 0.0 { -height * levels } else { 0.0 };
    Placement::Absolute(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARENT: Rect = Rect::new(20.0, 0.0, 220.0, 60.0);

    #[test]
    fn roots_always_flow() {
        let offsets = PositionOffsets::default();
        assert_eq!(resolve_position(1, None, 44.0, &offsets), Placement::Flow);
        assert_eq!(
            resolve_position(1, Some(PARENT), 44.0, &offsets),
            Placement::Flow
        );
        assert_eq!(
            resolve_position(0, Some(PARENT), 44.0, &offsets),
            Placement::Flow
        );
    }

    #[test]
    fn missing_parent_box_flows_at_origin() {
        let p = resolve_position(3, None, 44.0, &PositionOffsets::default());
        assert_eq!(p, Placement::Flow);
        assert_eq!(p.offset(), Point::ZERO);
    }

    #[test]
    fn depth_two_subtracts_stub() {
        let p = resolve_position(2, Some(PARENT), 44.0, &PositionOffsets::default());
        assert_eq!(p, Placement::Absolute(Point::new(220.0 - 14.0, -60.0)));
    }

    #[test]
    fn deeper_levels_add_half_scaffold_per_level() {
        let p = resolve_position(3, Some(PARENT), 44.0, &PositionOffsets::default());
        assert_eq!(p, Placement::Absolute(Point::new(220.0 + 44.0, -120.0)));
        let p = resolve_position(4, Some(PARENT), 44.0, &PositionOffsets::default());
        assert_eq!(p, Placement::Absolute(Point::new(220.0 + 66.0, -180.0)));
    }

    #[test]
    fn zero_height_parent_keeps_y_at_zero() {
        let flat = Rect::new(0.0, 0.0, 100.0, 0.0);
        let p = resolve_position(2, Some(flat), 44.0, &PositionOffsets::default());
        assert_eq!(p, Placement::Absolute(Point::new(86.0, 0.0)));
    }
}
