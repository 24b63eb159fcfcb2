//! Bounded, time-decimated position history for trail rendering
//!
//! Each body carries a `Trail`: a most-recent-first deque of past positions
//! plus a tick counter. A position is captured every `interval` simulation
//! ticks; once `capacity` entries exist the oldest are evicted first. The
//! decimation only bounds memory and redraw cost, it has no effect on the
//! numerics.

use std::collections::VecDeque;

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<NVec2>, // most recent first
    tick: u32,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the tick counter by one simulation step; when it reaches
    /// `interval` the counter resets, tail entries are evicted down to
    /// `capacity`, and `x` is pushed to the front.
    pub fn record(&mut self, x: NVec2, interval: u32, capacity: usize) {
        self.tick += 1;
        if self.tick < interval {
            return;
        }
        self.tick = 0;

        if capacity == 0 {
            return;
        }
        while self.points.len() >= capacity {
            self.points.pop_back();
        }
        self.points.push_front(x);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recorded positions, most recent first
    pub fn positions(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }

    /// Oldest recorded position still retained, if any
    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    /// Most recently recorded position, if any
    pub fn newest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.tick = 0;
    }
}
