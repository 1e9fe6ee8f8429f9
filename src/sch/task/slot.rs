//! Task slot definition
//!
//! A slot is either free or holds everything the scheduler knows about one
//! task: its body and its timing state.

use crate::types::{SchRunCtr, SchTick, TaskFn};

/// Timing state and body of a registered task
#[derive(Debug, Clone, Copy)]
pub struct TaskEntry {
    callback: TaskFn,
    delay: SchTick,
    period: SchTick,
    pending_runs: SchRunCtr,
}

impl TaskEntry {
    /// Create an entry with no pending runs
    #[inline]
    pub const fn new(callback: TaskFn, delay: SchTick, period: SchTick) -> Self {
        Self {
            callback,
            delay,
            period,
            pending_runs: 0,
        }
    }

    /// Task body
    #[inline]
    pub fn callback(&self) -> TaskFn {
        self.callback
    }

    /// Ticks left before the next due event
    #[inline]
    pub fn delay(&self) -> SchTick {
        self.delay
    }

    /// Ticks between due events, 0 for one-shot tasks
    #[inline]
    pub fn period(&self) -> SchTick {
        self.period
    }

    /// Due events not yet dispatched
    #[inline]
    pub fn pending_runs(&self) -> SchRunCtr {
        self.pending_runs
    }

    #[inline]
    pub fn is_one_shot(&self) -> bool {
        self.period == 0
    }

    /// Whether the next dispatch pass will run this task
    #[inline]
    pub fn is_due(&self) -> bool {
        self.pending_runs > 0
    }

    /// Advance by one tick
    ///
    /// A task whose delay has run out gains a pending run. Periodic tasks
    /// reload to `period - 1` because the current tick already counts as the
    /// first tick of the new interval. One-shot tasks stay at zero until the
    /// dispatcher retires them, gaining a run on every tick meanwhile.
    #[inline]
    pub(crate) fn tick(&mut self) {
        if self.delay == 0 {
            self.pending_runs = self.pending_runs.saturating_add(1);
            if self.period != 0 {
                self.delay = self.period - 1;
            }
        } else {
            self.delay -= 1;
        }
    }

    /// Consume one pending run, if any
    #[inline]
    pub(crate) fn consume_run(&mut self) -> bool {
        if self.pending_runs == 0 {
            return false;
        }
        self.pending_runs -= 1;
        true
    }
}

/// One entry of the task table
#[derive(Debug, Clone, Copy, Default)]
pub enum TaskSlot {
    /// Free slot
    #[default]
    Empty,
    /// Slot holding a registered task
    Occupied(TaskEntry),
}

impl TaskSlot {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, TaskSlot::Empty)
    }

    /// Entry held by this slot
    #[inline]
    pub fn entry(&self) -> Option<&TaskEntry> {
        match self {
            TaskSlot::Occupied(entry) => Some(entry),
            TaskSlot::Empty => None,
        }
    }

    #[inline]
    pub(crate) fn entry_mut(&mut self) -> Option<&mut TaskEntry> {
        match self {
            TaskSlot::Occupied(entry) => Some(entry),
            TaskSlot::Empty => None,
        }
    }
}
