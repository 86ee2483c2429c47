//! Virtual-clock timer queue.
//!
//! The slideshow only ever suspends on timers: the autoplay interval, the
//! short delay before a slide starts moving, and the settle delay that ends a
//! transition. [`TimerQueue`] provides `setTimeout`/`setInterval` semantics
//! over a clock that only moves when the owner advances it, which keeps every
//! run deterministic.
//!
//! Timers fire in due-time order; timers due at the same instant fire in the
//! order they were scheduled. An interval is re-armed before its payload is
//! handed out, so the handler may clear it.

use std::collections::BTreeMap;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Scheduling surface used by slideshow controllers.
pub trait Scheduler<T> {
    /// Current virtual time in milliseconds.
    fn now(&self) -> u64;
    /// Fire `payload` once, `delay_ms` from now.
    fn set_timeout(&mut self, delay_ms: u64, payload: T) -> TimerId;
    /// Fire `payload` every `period_ms`, first at now + `period_ms`.
    fn set_interval(&mut self, period_ms: u64, payload: T) -> TimerId;
    /// Cancel a timer. Unknown or already-fired ids are ignored.
    fn clear(&mut self, id: TimerId);
}

/// A timer that came due.
#[derive(Debug, Clone, PartialEq)]
pub struct Fired<T> {
    pub id: TimerId,
    pub at_ms: u64,
    pub payload: T,
}

#[derive(Debug)]
struct Entry<T> {
    id: TimerId,
    period_ms: Option<u64>,
    payload: T,
}

/// Deterministic timer queue keyed by `(due_ms, sequence)`.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now_ms: u64,
    next_seq: u64,
    entries: BTreeMap<(u64, u64), Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Number of live timers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the timer is still scheduled.
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.entries.values().any(|e| e.id == id)
    }

    /// Due time of the earliest pending timer.
    pub fn next_due(&self) -> Option<u64> {
        self.entries.keys().next().map(|(due, _)| *due)
    }

    /// Move the clock forward to `deadline` without firing anything.
    ///
    /// Callers drain [`pop_due`](Self::pop_due) first; the clock never moves
    /// backwards.
    pub fn advance_clock(&mut self, deadline: u64) {
        self.now_ms = self.now_ms.max(deadline);
    }

    fn insert(&mut self, due: u64, entry: Entry<T>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert((due, seq), entry);
    }

    fn schedule(&mut self, delay_ms: u64, period_ms: Option<u64>, payload: T) -> TimerId {
        // The sequence number doubles as the public id
        let id = TimerId(self.next_seq);
        let due = self.now_ms.saturating_add(delay_ms);
        self.insert(
            due,
            Entry {
                id,
                period_ms,
                payload,
            },
        );
        id
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Remove and return the earliest timer due at or before `deadline`,
    /// moving the clock to its due time. Intervals are re-armed.
    pub fn pop_due(&mut self, deadline: u64) -> Option<Fired<T>> {
        let (&key, _) = self.entries.iter().next().filter(|((due, _), _)| *due <= deadline)?;
        let entry = self.entries.remove(&key)?;
        let (due, _) = key;
        self.now_ms = self.now_ms.max(due);

        let fired = Fired {
            id: entry.id,
            at_ms: due,
            payload: entry.payload.clone(),
        };
        // Zero periods would spin forever at the same instant. An interval
        // whose next due time is past the end of the clock is retired.
        if let Some(next_due) = entry.period_ms.and_then(|p| due.checked_add(p.max(1))) {
            self.insert(next_due, entry);
        }
        Some(fired)
    }
}

impl<T> Scheduler<T> for TimerQueue<T> {
    fn now(&self) -> u64 {
        self.now_ms
    }

    fn set_timeout(&mut self, delay_ms: u64, payload: T) -> TimerId {
        self.schedule(delay_ms, None, payload)
    }

    fn set_interval(&mut self, period_ms: u64, payload: T) -> TimerId {
        self.schedule(period_ms.max(1), Some(period_ms), payload)
    }

    fn clear(&mut self, id: TimerId) {
        self.entries.retain(|_, e| e.id != id);
    }
}
