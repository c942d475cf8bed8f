// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme configuration.

use trellis_connector::ConnectorStyle;
use trellis_measure::MeasureMode;
use trellis_tree::{DEFAULT_ROW_HEIGHT, PositionOffsets};

/// Options recognized by [`ThemeRenderer`](crate::ThemeRenderer).
///
/// All lengths are logical pixels; intervals are milliseconds of the host clock.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThemeConfig {
    /// Horizontal increment per tree depth, shared with the host widget.
    pub scaffold_width: f64,
    /// Row height reported for nodes that never rendered.
    pub row_height: f64,
    /// Period of the container/content measurement timer.
    pub geometry_interval_ms: u64,
    /// Period of the connector redraw timer.
    pub connector_interval_ms: u64,
    /// Polling, or host-driven observation.
    pub measure_mode: MeasureMode,
    /// Per-depth placement corrections.
    pub position: PositionOffsets,
    /// Connector surface sizes and paddings.
    pub connector: ConnectorStyle,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            scaffold_width: 44.0,
            row_height: DEFAULT_ROW_HEIGHT,
            geometry_interval_ms: 10,
            connector_interval_ms: 100,
            measure_mode: MeasureMode::Poll,
            position: PositionOffsets::default(),
            connector: ConnectorStyle::default(),
        }
    }
}
