// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Probes over live elements and change-suppressing watches.

use alloc::vec::Vec;

use kurbo::Rect;

/// A handle that can read the current rectangle of a rendered element.
///
/// Returning `None` means the element is not mounted yet; callers skip the
/// tick and try again later.
pub trait Probe {
    /// Read the element's current bounding rectangle.
    fn read(&self) -> Option<Rect>;
}

impl<F: Fn() -> Option<Rect>> Probe for F {
    fn read(&self) -> Option<Rect> {
        self()
    }
}

/// Remembers the last published rectangle and only republishes on change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectWatch {
    last: Option<Rect>,
}

impl RectWatch {
    /// A watch that has not published anything yet.
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// The last published rectangle.
    pub const fn last(&self) -> Option<Rect> {
        self.last
    }

    /// Read the probe and return the rectangle if it differs from the last
    /// published one.
    ///
    /// An unmounted probe yields `None` and leaves the last rectangle alone.
    pub fn poll(&mut self, probe: &(impl Probe + ?Sized)) -> Option<Rect> {
        let rect = probe.read()?;
        if self.last == Some(rect) {
            return None;
        }
        self.last = Some(rect);
        Some(rect)
    }

    /// Forget the last published rectangle so the next read republishes.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Outcome of one measurement tick for a row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowMeasurement {
    /// New container rectangle, if it changed.
    pub container: Option<Rect>,
    /// New content rectangle, if it changed.
    pub content: Option<Rect>,
}

impl RowMeasurement {
    /// Returns `true` if either rectangle changed.
    pub fn changed(&self) -> bool {
        self.container.is_some() || self.content.is_some()
    }
}

/// The container/content pair watched for every rendered row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowWatch {
    /// Outer container of the row.
    pub container: RectWatch,
    /// Row content; its rectangle is the node's measured box.
    pub content: RectWatch,
    loaded: bool,
}

impl RowWatch {
    /// A fresh watch.
    pub const fn new() -> Self {
        Self {
            container: RectWatch::new(),
            content: RectWatch::new(),
            loaded: false,
        }
    }

    /// Poll both probes.
    pub fn poll(
        &mut self,
        container: &(impl Probe + ?Sized),
        content: &(impl Probe + ?Sized),
    ) -> RowMeasurement {
        let m = RowMeasurement {
            container: self.container.poll(container),
            content: self.content.poll(content),
        };
        if self.content.last().is_some() {
            self.loaded = true;
        }
        m
    }

    /// Returns `true` once the content box has been published at least once.
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }
}

/// Keys whose layout was reported as changed by a host observer.
///
/// Used instead of polling when the platform can notify about resizes and
/// mutations. Keys are deduplicated and drained in notification order.
#[derive(Clone, Debug)]
pub struct Invalidations<K> {
    pending: Vec<K>,
}

impl<K> Default for Invalidations<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq> Invalidations<K> {
    /// An empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `key` needs measuring.
    pub fn notify(&mut self, key: K) {
        if !self.pending.contains(&key) {
            self.pending.push(key);
        }
    }

    /// Drop a pending notification, for example when the row unmounts.
    pub fn forget(&mut self, key: &K) {
        self.pending.retain(|k| k != key);
    }

    /// Returns `true` if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending key.
    pub fn drain(&mut self) -> Vec<K> {
        core::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn unchanged_rect_is_suppressed() {
        let mut watch = RectWatch::new();
        let probe = || Some(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(watch.poll(&probe), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(watch.poll(&probe), None);
        watch.reset();
        assert!(watch.poll(&probe).is_some());
    }

    #[test]
    fn unmounted_probe_is_skipped_silently() {
        let mut watch = RectWatch::new();
        let mounted = Cell::new(false);
        let probe = || mounted.get().then(|| Rect::new(0.0, 0.0, 5.0, 5.0));
        assert_eq!(watch.poll(&probe), None);
        assert_eq!(watch.last(), None);
        mounted.set(true);
        assert!(watch.poll(&probe).is_some());
        mounted.set(false);
        assert_eq!(watch.poll(&probe), None);
        assert_eq!(watch.last(), Some(Rect::new(0.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn row_watch_loads_on_first_content() {
        let mut row = RowWatch::new();
        let container = || Some(Rect::new(0.0, 0.0, 300.0, 62.0));
        let content = || None::<Rect>;
        let m = row.poll(&container, &content);
        assert!(m.changed());
        assert!(!row.is_loaded());

        let content = || Some(Rect::new(0.0, 0.0, 200.0, 60.0));
        let m = row.poll(&container, &content);
        assert_eq!(m.container, None);
        assert!(m.content.is_some());
        assert!(row.is_loaded());
    }

    #[test]
    fn invalidations_dedupe_and_drain() {
        let mut inv = Invalidations::new();
        inv.notify(3_u32);
        inv.notify(1);
        inv.notify(3);
        inv.forget(&1);
        inv.notify(7);
        assert_eq!(inv.drain(), [3, 7]);
        assert!(inv.is_empty());
    }
}
