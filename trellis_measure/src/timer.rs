// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interval timers driven by a host clock.

use alloc::vec::Vec;

/// Identifier for an interval timer (generational).
///
/// A cancelled timer's id never fires again, even if its slot is reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerId(u32, u32);

impl TimerId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Timer<K> {
    generation: u32,
    key: K,
    period: u64,
    next_due: u64,
}

/// A set of repeating timers, each carrying a caller-chosen key.
///
/// Time is supplied by the host in milliseconds; nothing here reads a clock.
/// A timer first fires one period after it starts, then every period. If a
/// host falls behind, a late timer fires once and is rescheduled one period
/// after `now` rather than firing a burst.
///
/// ```rust
/// use trellis_measure::Timers;
///
/// let mut timers = Timers::new();
/// let fast = timers.start("geometry", 10, 0);
/// let slow = timers.start("connector", 100, 0);
///
/// assert!(timers.due(5).is_empty());
/// assert_eq!(timers.due(10), [(fast, "geometry")]);
///
/// timers.cancel(slow);
/// assert!(timers.due(100).iter().all(|(id, _)| *id != slow));
/// ```
#[derive(Clone, Debug)]
pub struct Timers<K> {
    slots: Vec<Option<Timer<K>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl<K> Default for Timers<K> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }
}

impl<K: Clone> Timers<K> {
    /// An empty timer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a repeating timer. A zero period is treated as one millisecond.
    pub fn start(&mut self, key: K, period: u64, now: u64) -> TimerId {
        let period = period.max(1);
        let timer = |generation| Timer {
            generation,
            key,
            period,
            next_due: now.saturating_add(period),
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(timer(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(timer(generation)));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "TimerId indices are 32-bit."
        )]
        TimerId(idx as u32, generation)
    }

    /// Stop a timer and return its key. Stale ids return `None`.
    pub fn cancel(&mut self, id: TimerId) -> Option<K> {
        if !self.is_active(id) {
            return None;
        }
        let timer = self.slots[id.idx()].take()?;
        self.free_list.push(id.idx());
        Some(timer.key)
    }

    /// Returns `true` if the timer is running.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|t| t.as_ref())
            .is_some_and(|t| t.generation == id.1)
    }

    /// Number of running timers.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|t| t.is_some()).count()
    }

    /// Returns `true` if no timer is running.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Earliest deadline among running timers.
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots.iter().flatten().map(|t| t.next_due).min()
    }

    /// Collect every timer whose deadline is at or before `now` and reschedule it.
    pub fn due(&mut self, now: u64) -> Vec<(TimerId, K)> {
        let mut fired = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let Some(timer) = slot else {
                continue;
            };
            if timer.next_due > now {
                continue;
            }
            timer.next_due = timer.next_due.saturating_add(timer.period);
            if timer.next_due <= now {
                timer.next_due = now.saturating_add(timer.period);
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "TimerId indices are 32-bit."
            )]
            let id = TimerId(idx as u32, timer.generation);
            fired.push((id, timer.key.clone()));
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_every_period() {
        let mut timers = Timers::new();
        let id = timers.start(1_u8, 10, 0);
        assert!(timers.due(9).is_empty());
        assert_eq!(timers.due(10), [(id, 1)]);
        assert!(timers.due(15).is_empty());
        assert_eq!(timers.due(20), [(id, 1)]);
        assert_eq!(timers.next_deadline(), Some(30));
    }

    #[test]
    fn late_host_does_not_burst() {
        let mut timers = Timers::new();
        let id = timers.start((), 10, 0);
        assert_eq!(timers.due(95).len(), 1);
        assert!(timers.due(100).is_empty());
        assert_eq!(timers.due(105), [(id, ())]);
    }

    #[test]
    fn cancelled_timer_never_fires_even_after_reuse() {
        let mut timers = Timers::new();
        let a = timers.start('a', 10, 0);
        assert_eq!(timers.cancel(a), Some('a'));
        assert_eq!(timers.cancel(a), None);
        assert!(!timers.is_active(a));

        let b = timers.start('b', 10, 0);
        assert_ne!(a, b, "reused slot gets a new generation");
        assert_eq!(timers.due(10), [(b, 'b')]);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn independent_cadences() {
        let mut timers = Timers::new();
        let fast = timers.start("fast", 10, 0);
        let _slow = timers.start("slow", 100, 0);
        let fired: usize = (1..=100).map(|t| timers.due(t).len()).sum();
        assert_eq!(fired, 11);
        assert!(timers.is_active(fast));
        assert!(!timers.is_empty());
    }
}
