// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Measure: measurement cadence for rendered rows.
//!
//! Hosts rarely get told when a rendered element's geometry changes. This crate
//! provides the pieces to converge on it anyway:
//!
//! - [`Probe`]: reads an element's rectangle, or `None` while it is unmounted.
//! - [`RectWatch`] / [`RowWatch`]: remember the last published rectangle and
//!   suppress structurally equal reads, so unchanged layout causes no
//!   downstream recompute or redraw.
//! - [`Timers`]: repeating timers on a host-supplied millisecond clock, with
//!   explicit cancellation for teardown.
//! - [`Invalidations`]: a queue fed by a host resize/mutation observer, used
//!   when [`MeasureMode::Observe`] replaces polling.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod probe;
mod timer;

pub use probe::{Invalidations, Probe, RectWatch, RowMeasurement, RowWatch};
pub use timer::{TimerId, Timers};

/// How row geometry is refreshed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureMode {
    /// Re-read every mounted row on a fixed interval.
    #[default]
    Poll,
    /// Re-read only rows the host reports through its layout observer.
    Observe,
}
