//! Delayed-callback facility
//!
//! A min-ordered queue of (fire time, action value). Scheduled actions are
//! fire-and-forget and cannot be cancelled; callers re-check their own state
//! at fire time instead. Ties in fire time resolve in scheduling order so
//! that advancing the clock is deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<A> {
    fire_at: f64,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<A> Eq for Entry<A> {}

impl<A> Ord for Entry<A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fire_at
            .total_cmp(&other.fire_at)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-threaded timer queue driven by an external clock
#[derive(Debug)]
pub struct Scheduler<A> {
    now: f64,
    seq: u64,
    queue: BinaryHeap<Reverse<Entry<A>>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            seq: 0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current clock value in seconds
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of actions still waiting to fire
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Schedule `action` to fire `delay_secs` from now. Negative delays
    /// clamp to zero (fires on the next advance).
    pub fn schedule_after(&mut self, delay_secs: f64, action: A) {
        let fire_at = self.now + delay_secs.max(0.0);
        let seq = self.seq;
        self.seq += 1;
        self.queue.push(Reverse(Entry {
            fire_at,
            seq,
            action,
        }));
    }

    /// Advance the clock by `dt` seconds and drain every action whose fire
    /// time has been reached, in fire-time order.
    pub fn advance(&mut self, dt: f64) -> Vec<A> {
        self.now += dt;
        let mut fired = Vec::new();
        while let Some(Reverse(entry)) = self.queue.peek() {
            if entry.fire_at > self.now {
                break;
            }
            if let Some(Reverse(entry)) = self.queue.pop() {
                fired.push(entry.action);
            }
        }
        fired
    }
}
